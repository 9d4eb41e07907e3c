use tabled::Table;

use crate::{
    activity::Activity,
    error, info,
    types::{Recommendations, RecommendedSongsQuery, RecommendedTrackTableRow},
    warning,
};

pub async fn recommend(
    artists: Vec<String>,
    mut genres: Vec<String>,
    tracks: Vec<String>,
    activity: Option<String>,
) {
    if let Some(label) = activity {
        let activity = Activity::from(label.as_str());
        info!("Using {} genres for {}", activity.genre(), activity);
        genres.extend(activity.seed_genres());
    }

    let mut client = super::client();
    let pb = super::spinner("Fetching recommendations...");
    let result = client.recommend_track(&artists, &genres, &tracks).await;
    pb.finish_and_clear();

    match result {
        Ok(Recommendations::Found(value)) => super::print_json(&value),
        Ok(Recommendations::Rejected(status)) => {
            warning!("Recommendations rejected with status {}", status.as_u16())
        }
        Err(e) => error!("Request failed. Err: {}", e),
    }
}

pub async fn songs(query: RecommendedSongsQuery, token: Option<String>) {
    let mut client = super::client();
    let pb = super::spinner("Fetching recommended songs...");
    let result = client.recommended_tracks(&query, token.as_deref()).await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Request failed. Err: {}", e),
    };

    if tracks.is_empty() {
        warning!("No recommended songs.");
        return;
    }

    let rows: Vec<RecommendedTrackTableRow> = tracks.into_iter().map(Into::into).collect();
    println!("{}", Table::new(rows));
}
