use std::path::PathBuf;

use anyhow::{anyhow, Context};
use futures::channel::oneshot;
use threadline_client::{
    api::{CommentId, LOCAL_AUTHOR, STORAGE_KEY},
    view, CommentStore, Config, ReplyFocus,
};

mod notify;
use notify::StderrNotifier;

mod print;

mod source;
use source::HttpSource;

mod storage;
use storage::FileStore;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Base url of the comment feed server
    #[structopt(short, long, env = "THREADLINE_HOST")]
    host: String,

    /// File holding the comments written from this machine
    #[structopt(long, default_value = "threadline-comments.json")]
    state_file: PathBuf,

    /// Name to sign new comments with
    #[structopt(long, env = "THREADLINE_AUTHOR", default_value = LOCAL_AUTHOR)]
    author: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Print the thread
    Show {
        /// Order each group of replies by date instead of arrival
        #[structopt(long)]
        by_date: bool,
    },

    /// Start a new top-level comment
    Post {
        /// Comment text
        body: String,
    },

    /// Reply to a comment
    Reply {
        /// Id of the comment to reply to
        parent: i64,

        /// Reply text
        body: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let config = Config {
        author_name: opt.author,
        storage_key: String::from(STORAGE_KEY),
    };
    let mut store = CommentStore::new(config, FileStore::new(opt.state_file), StderrNotifier);
    let source = HttpSource::new(&opt.host);

    // Give up on the fetch if the user hits ctrl-c
    let (cancel, cancelled) = oneshot::channel::<()>();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            drop(cancelled);
        }
    });
    if store
        .load(&source, cancel)
        .await
        .context("loading comments")?
        .is_none()
    {
        return Err(anyhow!("interrupted while fetching comments"));
    }

    let mut focus = ReplyFocus::default();
    match opt.cmd {
        Command::Show { by_date } => {
            let mut forest = store.forest().context("building reply tree")?;
            if by_date {
                forest.sort_by_date();
            }
            let thread = view::render(
                &forest,
                &focus,
                store.comments(),
                store.is_loading(),
                &chrono::Local,
            );
            print!("{}", print::thread(&thread));
        }
        Command::Post { body } => {
            let c = focus
                .submit(&mut store, &body, None)
                .context("posting comment")?;
            println!("posted comment #{}", c.id);
        }
        Command::Reply { parent, body } => {
            let parent = CommentId(parent);
            if store.find(parent).is_none() {
                return Err(anyhow!("there is no comment #{parent} to reply to"));
            }
            focus.activate(parent);
            let c = focus
                .submit(&mut store, &body, Some(parent))
                .with_context(|| format!("replying to comment #{parent}"))?;
            println!("posted reply #{} to #{parent}", c.id);
        }
    }

    Ok(())
}
