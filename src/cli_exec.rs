use std::path::PathBuf;

use anyhow::{Context, Result};

use cellbook::client::{Client, EditTarget, EditorSession, OpenOutcome, Outcome, Route};
use cellbook::content::{self, Cell, GridBuffer};
use cellbook::model::{ClientConfig, DocumentId, SortField, SortOrder};
use cellbook::storage::LocalStore;

use crate::{Commands, ConfigCommands};

pub(crate) struct Ctx {
    store: LocalStore,
    url: Option<String>,
}

impl Ctx {
    pub(crate) fn new(data_dir: Option<PathBuf>, url: Option<String>) -> Result<Self> {
        let root = match data_dir {
            Some(d) => d,
            None => LocalStore::default_dir(&std::env::current_dir().context("get current dir")?),
        };
        let store = LocalStore::open_or_init(&root)?;
        Ok(Self { store, url })
    }

    fn config(&self) -> Result<ClientConfig> {
        let mut cfg = self.store.read_config()?;
        if let Some(url) = &self.url {
            cfg.base_url = url.clone();
        }
        Ok(cfg)
    }

    fn client(&self) -> Result<Client<LocalStore>> {
        Client::new(&self.config()?, self.store.clone())
    }

    /// Client for a protected screen; fails when no session is stored.
    fn authed_client(&self, route: Route) -> Result<Client<LocalStore>> {
        let client = self.client()?;
        if client.guard(route) == Route::Home {
            anyhow::bail!("not logged in (run `cellbook login --email ... --password ...`)");
        }
        Ok(client)
    }
}

pub(crate) fn handle_command(ctx: &Ctx, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            let mut client = ctx.client()?;
            let outcome = client.login(&email, &password);
            finish_auth(&client, outcome)
        }
        Commands::Signup {
            email,
            password,
            confirm_password,
        } => {
            let mut client = ctx.client()?;
            let outcome = client.signup(&email, &password, &confirm_password);
            finish_auth(&client, outcome)
        }
        Commands::Logout => {
            ctx.client()?.logout();
            println!("Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let client = ctx.client()?;
            match &client.state().session.user {
                Some(user) => {
                    println!("id: {}", user.id);
                    println!("email: {}", user.email);
                }
                None => println!("not logged in"),
            }
            Ok(())
        }
        Commands::Config { command } => handle_config_command(ctx, command),
        Commands::List { sort, order } => handle_list_command(ctx, sort, order),
        Commands::Show { id, json } => handle_show_command(ctx, id, json),
        Commands::Create {
            name,
            description,
            grid,
        } => handle_create_command(ctx, name, description, grid),
        Commands::Edit {
            id,
            name,
            description,
            set,
        } => handle_edit_command(ctx, id, name, description, set),
        Commands::Delete { id, yes } => handle_delete_command(ctx, id, yes),
    }
}

fn finish_auth(client: &Client<LocalStore>, outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Navigate(_) => {
            let email = client
                .state()
                .session
                .user
                .as_ref()
                .map(|u| u.email.as_str())
                .unwrap_or("");
            println!("Logged in as {}", email);
            Ok(())
        }
        Outcome::Invalid(errors) => {
            for (field, msg) in errors.iter() {
                eprintln!("{}: {}", field, msg);
            }
            anyhow::bail!("invalid input")
        }
        Outcome::Stay => {
            let msg = client.state().session.error.clone().unwrap_or_default();
            anyhow::bail!(msg)
        }
    }
}

fn handle_config_command(ctx: &Ctx, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let cfg = ctx.config()?;
            println!("data_dir: {}", ctx.store.root().display());
            println!("base_url: {}", cfg.base_url);
        }
        ConfigCommands::SetUrl { url } => {
            let mut cfg = ctx.store.read_config()?;
            cfg.base_url = url;
            ctx.store.write_config(&cfg)?;
            println!("base_url: {}", cfg.base_url);
        }
    }
    Ok(())
}

fn handle_list_command(ctx: &Ctx, sort: SortField, order: SortOrder) -> Result<()> {
    let mut client = ctx.authed_client(Route::Dashboard)?;

    // Reach the requested ordering through the header-click toggle.
    if client.state().collection.sort_field != sort {
        client.set_sort(sort);
    }
    if client.state().collection.sort_order != order {
        client.set_sort(sort);
    }

    let outcome = client.refresh();
    ensure_not_expired(&outcome)?;

    let view = &client.state().collection;
    if let Some(err) = &view.error {
        anyhow::bail!(err.clone());
    }

    let arrow = |f: SortField| {
        if view.sort_field == f {
            view.sort_order.arrow()
        } else {
            ""
        }
    };
    println!(
        "{:>6}  {:<24} {:<32} created{}",
        "id",
        format!("name{}", arrow(SortField::Name)),
        "description",
        arrow(SortField::Date)
    );
    if view.items.is_empty() {
        println!("No files found. Create your first file with `cellbook create`.");
    }
    for doc in &view.items {
        println!(
            "{:>6}  {:<24} {:<32} {}",
            doc.id,
            doc.name,
            doc.description(),
            doc.created_day()
        );
    }
    Ok(())
}

fn handle_show_command(ctx: &Ctx, id: DocumentId, json: bool) -> Result<()> {
    let mut client = ctx.authed_client(Route::Editor(EditTarget::Existing(id)))?;
    let session = open_existing(&mut client, id)?;
    if json {
        let out = serde_json::json!({
            "id": id,
            "name": session.name,
            "description": session.description,
            "grid": session.grid.to_text_rows(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize document json")?
        );
        return Ok(());
    }

    println!("name: {}", session.name);
    println!("description: {}", session.description);
    if session.content_fallback {
        eprintln!("warning: stored content was unreadable; showing an empty grid");
    }
    print_grid(&session.grid);
    Ok(())
}

fn handle_create_command(
    ctx: &Ctx,
    name: String,
    description: String,
    grid: Option<String>,
) -> Result<()> {
    let mut client = ctx.authed_client(Route::Editor(EditTarget::New))?;
    let mut session = match client.open(EditTarget::New) {
        OpenOutcome::Opened(s) => s,
        OpenOutcome::Navigate(_) => anyhow::bail!("cannot open a new document"),
    };
    session.name = name;
    session.description = description;
    if let Some(raw) = grid {
        let decoded = content::decode(&raw);
        if decoded.is_fallback() {
            anyhow::bail!("--grid must be a JSON array of rows");
        }
        session.grid = decoded.into_buffer();
    }
    save(&mut client, &session)?;
    println!("Created {}", session.name);
    Ok(())
}

fn handle_edit_command(
    ctx: &Ctx,
    id: DocumentId,
    name: Option<String>,
    description: Option<String>,
    set: Vec<String>,
) -> Result<()> {
    let mut client = ctx.authed_client(Route::Editor(EditTarget::Existing(id)))?;
    let mut session = open_existing(&mut client, id)?;
    if let Some(name) = name {
        session.name = name;
    }
    if let Some(description) = description {
        session.description = description;
    }
    for assignment in &set {
        let (row, col, value) = parse_cell_assignment(assignment)?;
        session.grid.set(row, col, Cell::Text(value))?;
    }
    save(&mut client, &session)?;
    println!("Saved {}", session.name);
    Ok(())
}

fn handle_delete_command(ctx: &Ctx, id: DocumentId, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete file {} without --yes", id);
    }
    let mut client = ctx.authed_client(Route::Dashboard)?;
    let outcome = client.remove(id);
    ensure_not_expired(&outcome)?;
    if let Some(err) = &client.state().collection.error {
        anyhow::bail!(err.clone());
    }
    println!("Deleted file {}", id);
    Ok(())
}

fn open_existing(client: &mut Client<LocalStore>, id: DocumentId) -> Result<EditorSession> {
    match client.open(EditTarget::Existing(id)) {
        OpenOutcome::Opened(session) => Ok(session),
        OpenOutcome::Navigate(route) => {
            ensure_not_expired(&Outcome::Navigate(route))?;
            let msg = client.state().collection.error.clone().unwrap_or_default();
            anyhow::bail!(msg)
        }
    }
}

fn save(client: &mut Client<LocalStore>, session: &EditorSession) -> Result<()> {
    let outcome = client.save(session);
    ensure_not_expired(&outcome)?;
    match outcome {
        Outcome::Navigate(_) => Ok(()),
        _ => {
            let msg = client.state().collection.error.clone().unwrap_or_default();
            anyhow::bail!(msg)
        }
    }
}

fn ensure_not_expired(outcome: &Outcome) -> Result<()> {
    if outcome.route() == Some(Route::Home) {
        anyhow::bail!("session expired; log in again");
    }
    Ok(())
}

fn print_grid(grid: &GridBuffer) {
    let rows = grid.to_text_rows();
    let cols = grid.col_count();
    let widths: Vec<usize> = (0..cols)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();
    for row in &rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(c, w)| format!("{:<w$}", row.get(c).map(String::as_str).unwrap_or(""), w = *w))
            .collect();
        println!("| {} |", cells.join(" | "));
    }
}

fn parse_cell_assignment(s: &str) -> Result<(usize, usize, String)> {
    let (pos, value) = s
        .split_once('=')
        .with_context(|| format!("expected ROW:COL=VALUE, got `{}`", s))?;
    let (row, col) = pos
        .split_once(':')
        .with_context(|| format!("expected ROW:COL=VALUE, got `{}`", s))?;
    let row: usize = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row in `{}`", s))?;
    let col: usize = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column in `{}`", s))?;
    if row >= content::MAX_ROWS || col >= content::MAX_COLS {
        anyhow::bail!(
            "cell position in `{}` is beyond the {}x{} grid limit",
            s,
            content::MAX_ROWS,
            content::MAX_COLS
        );
    }
    Ok((row, col, value.to_string()))
}
