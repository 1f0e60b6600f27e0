use std::sync::Arc;

use crate::files::FileIndex;

pub struct AppState {
    pub index: Arc<FileIndex>,
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
