use serde::Deserialize;

#[derive(Deserialize)]
pub struct DownloadForm {
    #[serde(default)]
    pub code: String,
}

#[derive(Deserialize)]
pub struct AdminQuery {
    pub sidebar: Option<String>,
}

#[derive(Deserialize)]
pub struct SignInQuery {
    pub redirect_url: Option<String>,
}
