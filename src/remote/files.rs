use super::*;

impl RemoteClient {
    pub fn list_files(&self, field: SortField, order: SortOrder) -> Result<Vec<Document>> {
        let auth = self.auth()?;
        let query = ListFilesQuery {
            sort_field: field.as_str(),
            sort_order: order.as_str(),
        };
        let resp = with_retries("list files", || {
            self.client
                .get(self.url("/files"))
                .query(&query)
                .header(reqwest::header::AUTHORIZATION, &auth)
                .send()
                .context("send list files")
        })?;
        let out: Vec<Document> = self
            .ensure_ok(resp, "list files")?
            .json()
            .context("parse files")?;
        Ok(out)
    }

    pub fn get_file(&self, id: DocumentId) -> Result<Document> {
        let auth = self.auth()?;
        let resp = with_retries("get file", || {
            self.client
                .get(self.url(&format!("/files/{}", id)))
                .header(reqwest::header::AUTHORIZATION, &auth)
                .send()
                .context("send get file")
        })?;
        let out: Document = self
            .ensure_ok(resp, "get file")?
            .json()
            .context("parse file")?;
        Ok(out)
    }

    pub fn create_file(&self, payload: &DocumentPayload) -> Result<Document> {
        let resp = self
            .client
            .post(self.url("/files"))
            .header(reqwest::header::AUTHORIZATION, self.auth()?)
            .json(payload)
            .send()
            .context("create file")?;
        let out: Document = self
            .ensure_ok(resp, "create file")?
            .json()
            .context("parse created file")?;
        Ok(out)
    }

    pub fn update_file(&self, id: DocumentId, payload: &DocumentPayload) -> Result<Document> {
        let resp = self
            .client
            .put(self.url(&format!("/files/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth()?)
            .json(payload)
            .send()
            .context("update file")?;
        let out: Document = self
            .ensure_ok(resp, "update file")?
            .json()
            .context("parse updated file")?;
        Ok(out)
    }

    pub fn delete_file(&self, id: DocumentId) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/files/{}", id)))
            .header(reqwest::header::AUTHORIZATION, self.auth()?)
            .send()
            .context("delete file")?;
        self.ensure_ok(resp, "delete file")?;
        Ok(())
    }
}
