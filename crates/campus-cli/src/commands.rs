use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Authenticate and store tokens for later commands
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Clear the stored session (best-effort backend notification)
    Logout,

    /// Fetch and print the authenticated user's profile
    Whoami,

    /// List the schools the authenticated user belongs to
    Schools,

    /// Run a path through the route guards and print where it lands
    Open { path: String },

    /// Issue a GET request through the request pipeline
    Get {
        path: String,

        /// School id to scope the request to
        #[arg(long)]
        school: Option<String>,
    },
}
