use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to manage members, events and attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Membership and event-attendance tracker: members, zones, events and clock-in/out using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register, list, update or disable members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Manage the zone list
    Zone {
        #[command(subcommand)]
        action: ReferenceAction,
    },

    /// Manage the district list
    District {
        #[command(subcommand)]
        action: ReferenceAction,
    },

    /// Create, list, update or disable events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Start an event (records its start time once)
    Start {
        /// Event id
        event: i64,
    },

    /// Clock a member in, or out when already in
    Join {
        /// Event id
        event: i64,
        /// Member id
        member: i64,
    },

    /// End an event: clock everyone out and compute durations
    End {
        /// Event id
        event: i64,

        #[arg(long = "note", help = "Closing note stored with the event")]
        note: Option<String>,
    },

    /// List the attendance of an event
    Attendees {
        /// Event id
        event: i64,

        #[arg(long = "status", help = "Only records in this state: join, leave or end")]
        status: Option<String>,

        #[arg(long = "table", help = "Print a table instead of JSON")]
        table: bool,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Register a new member
    Add(MemberArgs),

    /// List active members
    List {
        #[arg(long, help = "Maximum number of rows (default from config)")]
        limit: Option<usize>,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        #[arg(long = "table", help = "Print a table instead of JSON")]
        table: bool,
    },

    /// Show one member
    Show { id: i64 },

    /// Replace a member's profile
    Update {
        id: i64,

        #[command(flatten)]
        fields: MemberArgs,
    },

    /// Disable a member (soft delete)
    Del { id: i64 },

    /// Active members that are not inside an event
    Available,
}

#[derive(Args, Clone, Default)]
pub struct MemberArgs {
    #[arg(long = "name")]
    pub full_name: Option<String>,
    #[arg(long = "father")]
    pub father_name: Option<String>,
    #[arg(long)]
    pub zone: Option<String>,
    #[arg(long = "mobile")]
    pub mobile_number: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub education: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub cnic: Option<String>,
    #[arg(long, help = "Date of birth (YYYY-MM-DD)")]
    pub dob: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub age: Option<i64>,
    #[arg(long)]
    pub profession: Option<String>,
    #[arg(long, help = "Path of an already uploaded picture")]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum ReferenceAction {
    /// Add a value
    Add { name: String },
    /// List active values
    List,
    /// Rename a value
    Update { id: i64, name: String },
    /// Disable a value (soft delete)
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Create an event
    Add(EventArgs),

    /// List active events
    List {
        #[arg(long, help = "Maximum number of rows (default from config)")]
        limit: Option<usize>,

        #[arg(long = "table", help = "Print a table instead of JSON")]
        table: bool,
    },

    /// Show one event with its attendance counts
    Show { id: i64 },

    /// Replace an event's details
    Update {
        id: i64,

        #[command(flatten)]
        fields: EventArgs,
    },

    /// Disable an event (soft delete)
    Del { id: i64 },
}

#[derive(Args, Clone, Default)]
pub struct EventArgs {
    #[arg(long = "name")]
    pub event_name: Option<String>,
    #[arg(long, help = "Scheduled date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long = "type")]
    pub event_type: Option<String>,
    #[arg(long = "focal-name")]
    pub focal_person_name: Option<String>,
    #[arg(long = "focal-number")]
    pub focal_person_number: Option<String>,
    #[arg(long = "focal-email")]
    pub focal_person_email: Option<String>,
    #[arg(long = "info-name")]
    pub info_person_name: Option<String>,
    #[arg(long = "info-number")]
    pub info_person_number: Option<String>,
    #[arg(long = "info-email")]
    pub info_person_email: Option<String>,
}
