use clap::{Parser, Subcommand};
use gitlite::areas::repository::Repository;
use gitlite::config::Config;
use gitlite::errors::RepositoryError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "gitlite",
    version = "0.1.0",
    about = "A minimal local version control tool",
    long_about = "gitlite tracks file snapshots in a hidden .gitLite directory: \
    it stages files by content hash, records a linear commit history \
    and shows line and character differences between a commit and its parent.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .gitLite directory in the current directory, \
        or in the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files and stages them. \
        Use '.' to stage every file of the working directory that is not ignored."
    )]
    Add {
        #[arg(required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged files as a new commit",
        long_about = "This command creates a new commit with the given message \
        from the staged files and clears the staging area."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit history")]
    Log,
    #[command(name = "status", about = "Show the files in the staging area")]
    Status,
    #[command(
        name = "diff",
        about = "Show the changes a commit made",
        long_about = "This command compares every file of a commit with the same file \
        in its parent commit, line by line and character by character."
    )]
    Diff {
        #[arg(index = 1, help = "The commit hash, full or abbreviated")]
        commit: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute the object ID of a file and optionally store it",
        long_about = "This command hashes a file and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw content of an object in the repository."
    )]
    CatFile {
        #[arg(index = 1, help = "The object hash, full or abbreviated")]
        object: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(Config::log_filter())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(repository_error) if repository_error.is_reported() => {
                println!("{repository_error}");
                repository_error.exit_code()
            }
            Some(repository_error) => {
                eprintln!("error: {error:#}");
                repository_error.exit_code()
            }
            None => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_from_env()?;
    let pwd = std::env::current_dir()?;

    let path = match &cli.command {
        Commands::Init { path: Some(path) } => path.clone(),
        _ => pwd.to_string_lossy().into_owned(),
    };
    let mut repository = Repository::new(&path, Box::new(std::io::stdout()), config)?;

    match &cli.command {
        Commands::Init { .. } => repository.init().await?,
        Commands::Add { paths } => repository.add(paths).await?,
        Commands::Commit { message } => repository.commit(message).await?,
        Commands::Log => repository.log().await?,
        Commands::Status => repository.status().await?,
        Commands::Diff { commit } => repository.diff(commit).await?,
        Commands::HashObject { write, file } => repository.hash_object(file, *write).await?,
        Commands::CatFile { object } => repository.cat_file(object)?,
    }

    Ok(())
}
