use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodmix::{
    cli::{self, SearchKind},
    config, error,
    types::RecommendedSongsQuery,
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[clap(about = "Request a client-credentials token")]
    Auth,

    #[clap(about = "Show an album")]
    Album { id: String },

    #[clap(about = "Show an artist")]
    Artist { id: String },

    #[clap(about = "Show a track")]
    Track { id: String },

    #[clap(about = "List public playlists of a user")]
    Playlists { user_id: Option<String> },

    #[clap(about = "List available genre seeds")]
    Genres,

    #[clap(about = "Show the profile of the token owner")]
    Profile,

    Recommend(RecommendOptions),

    Songs(SongsOptions),

    #[clap(about = "Find the id of the first matching artist or track")]
    Search {
        #[clap(value_enum)]
        kind: SearchKind,
        query: String,
    },

    Playlist(PlaylistOptions),

    #[clap(about = "Show the genres for an activity")]
    Activity { label: String },

    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Get recommendations for seed artists, genres and tracks")]
pub struct RecommendOptions {
    #[clap(long = "artist", value_delimiter = ',')]
    pub artists: Vec<String>,

    #[clap(long = "genre", value_delimiter = ',')]
    pub genres: Vec<String>,

    #[clap(long = "track", value_delimiter = ',')]
    pub tracks: Vec<String>,

    /// Add the genres of an activity (e.g. "Walking") to the seeds
    #[clap(long)]
    pub activity: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "List recommended songs")]
pub struct SongsOptions {
    #[clap(long, default_value_t = 20)]
    pub limit: u32,

    #[clap(long = "artist", default_value = "")]
    pub seed_artists: String,

    #[clap(long = "track", default_value = "")]
    pub seed_tracks: String,

    #[clap(long = "genre", default_value = "")]
    pub seed_genres: String,

    #[clap(long, default_value_t = 0.45)]
    pub max_instrumentalness: f64,

    /// Bearer token to use instead of the client-credentials token
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle playlists")]
pub struct PlaylistOptions {
    #[command(subcommand)]
    pub command: PlaylistSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistSubcommand {
    Create(PlaylistCreateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistCreateOpts {
    pub name: String,

    #[clap(long)]
    pub user: Option<String>,

    #[clap(long)]
    pub description: Option<String>,

    /// User token with the playlist-modify-public scope
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Album { id } => cli::album(id).await,
        Command::Artist { id } => cli::artist(id).await,
        Command::Track { id } => cli::track(id).await,
        Command::Playlists { user_id } => cli::playlists(user_id).await,
        Command::Genres => cli::genres().await,
        Command::Profile => cli::profile().await,
        Command::Recommend(opt) => {
            cli::recommend(opt.artists, opt.genres, opt.tracks, opt.activity).await
        }
        Command::Songs(opt) => {
            let query = RecommendedSongsQuery {
                limit: opt.limit,
                seed_artists: utils::split_seeds(&opt.seed_artists).join(","),
                seed_tracks: utils::split_seeds(&opt.seed_tracks).join(","),
                seed_genres: utils::split_seeds(&opt.seed_genres).join(","),
                max_instrumentalness: opt.max_instrumentalness,
            };
            cli::songs(query, opt.token).await
        }
        Command::Search { kind, query } => cli::search(kind, query).await,
        Command::Playlist(opt) => match opt.command {
            PlaylistSubcommand::Create(c) => {
                cli::create_playlist(c.user, c.name, c.description, c.token).await
            }
        },
        Command::Activity { label } => cli::activity(label),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
