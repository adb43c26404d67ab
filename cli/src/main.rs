mod http;


use std::cell::RefCell;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use feed::config::DEFAULT_SIGNUP_PATH;
use feed::{
    ApiClient, ApiConfig, ApiError, AuthState, CommentFeed, FeedError, FeedState, Notice,
    SessionError, SessionManager, Store, notice,
};
use tracing_subscriber::EnvFilter;

use crate::http::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing API URL; pass --base-url or set API_URL")]
    MissingBaseUrl,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Parser, Debug)]
#[command(name = "feed-cli", about = "Comment feed API client")]
struct Cli {
    #[arg(long, env = "API_URL")]
    base_url: Option<String>,

    #[arg(long, env = "API_SIGNUP_PATH", default_value = DEFAULT_SIGNUP_PATH)]
    signup_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long, env = "API_EMAIL")]
    email: String,

    #[arg(long, env = "API_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the comment feed.
    Comments,
    /// Create an account. Does not log in.
    Signup {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Log in, post a comment, and print the refreshed feed.
    Post {
        #[command(flatten)]
        credentials: Credentials,
        content: String,
    },
    /// Log in, delete one of your comments, and print the refreshed feed.
    Delete {
        #[command(flatten)]
        credentials: Credentials,
        id: String,
    },
}

type Sessions = SessionManager<ReqwestTransport, Rc<RefCell<AuthState>>>;
type Feed = CommentFeed<ReqwestTransport, Rc<RefCell<FeedState>>>;

/// One invocation is one "page view": the session lives only as long as this.
struct CliContext {
    sessions: Sessions,
    feed: Feed,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::new(cli.base_url.as_deref(), Some(&cli.signup_path));
    let Some(base_url) = config.base_url() else {
        show(&notice::api_disabled());
        return Err(CliError::MissingBaseUrl);
    };
    tracing::info!(%base_url, signup_path = config.signup_path(), "using comment API");

    let api = ApiClient::new(config, ReqwestTransport::new(reqwest::Client::new()));
    let ctx = CliContext {
        sessions: SessionManager::new(api.clone(), Rc::new(RefCell::new(AuthState::default()))),
        feed: CommentFeed::new(api, Rc::new(RefCell::new(FeedState::default()))),
    };

    match cli.command {
        Command::Comments => run_comments(&ctx).await,
        Command::Signup { credentials } => run_signup(&ctx, &credentials).await,
        Command::Post {
            credentials,
            content,
        } => run_post(&ctx, &credentials, &content).await,
        Command::Delete { credentials, id } => run_delete(&ctx, &credentials, &id).await,
    }
}

async fn run_comments(ctx: &CliContext) -> Result<(), CliError> {
    ctx.feed.refresh().await?;
    print_feed(&ctx.feed);
    Ok(())
}

async fn run_signup(ctx: &CliContext, credentials: &Credentials) -> Result<(), CliError> {
    let result = ctx
        .sessions
        .signup(&credentials.email, &credentials.password)
        .await;
    show(&notice::signup(&result));
    result?;
    Ok(())
}

async fn run_post(ctx: &CliContext, credentials: &Credentials, content: &str) -> Result<(), CliError> {
    login(ctx, credentials).await?;
    let result = ctx.feed.post_comment(content, &ctx.sessions.session()).await;
    show(&notice::post(&result));
    result?;
    print_feed(&ctx.feed);
    Ok(())
}

async fn run_delete(ctx: &CliContext, credentials: &Credentials, id: &str) -> Result<(), CliError> {
    login(ctx, credentials).await?;
    let result = ctx.feed.delete_comment(id, &ctx.sessions.session()).await;
    show(&notice::delete(&result));
    result?;
    print_feed(&ctx.feed);
    Ok(())
}

async fn login(ctx: &CliContext, credentials: &Credentials) -> Result<(), CliError> {
    let result = ctx
        .sessions
        .login(&credentials.email, &credentials.password)
        .await;
    show(&notice::login(&result));
    result?;
    Ok(())
}

fn show(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{notice}");
    } else {
        println!("{notice}");
    }
}

fn print_feed(feed: &Feed) {
    feed.store().read(|state| {
        if state.comments.is_empty() {
            println!("No comments yet");
            return;
        }
        for comment in &state.comments {
            println!(
                "{}  {}  {}",
                comment.created_at.format("%Y-%m-%d"),
                comment.email,
                comment.id
            );
            println!("    {}", comment.content);
        }
    });
}
