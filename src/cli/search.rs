use clap::ValueEnum;

use crate::{error, success};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Artist,
    Track,
}

pub async fn search(kind: SearchKind, query: String) {
    let mut client = super::client();
    let pb = super::spinner("Searching...");
    let result = match kind {
        SearchKind::Artist => client.search_artist(&query).await,
        SearchKind::Track => client.search_track(&query).await,
    };
    pb.finish_and_clear();

    match result {
        Ok(id) => success!("{}", id),
        Err(e) => error!("Search failed. Err: {}", e),
    }
}
