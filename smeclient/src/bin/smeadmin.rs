use clap::{
    Args,
    Parser,
    Subcommand,
};
use serde::Serialize;
use std::sync::Arc;

use smeclient::{
    Client,
    client::Builder as ClientBuilder,
    token::StaticToken,
};
use smecore::{
    entity::Entity,
    notification::{
        NotificationBroadcast,
        NotificationCreate,
        NotificationUpdate,
    },
    payment::{
        PaymentCreate,
        PaymentUpdate,
    },
    report::{
        ReportCreate,
        ReportUpdate,
    },
    status::RequestStatus,
    student::{
        StudentCreate,
        StudentUpdate,
    },
    teacher::{
        TeacherCreate,
        TeacherUpdate,
    },
};
use smestore::{
    EntityStore,
    PaymentStore,
    ReportStore,
    StudentStore,
    TeacherStore,
    notification::Builder as NotificationBuilder,
    store::Builder as StoreBuilder,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "SME_API_URL", env = "SME_API_URL")]
    api_url: String,
    #[clap(long, value_name = "SME_API_TOKEN", env = "SME_API_TOKEN")]
    api_token: Option<String>,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Student {
        #[command(subcommand)]
        cmd: StudentCmd,
    },
    #[command(arg_required_else_help = true)]
    Teacher {
        #[command(subcommand)]
        cmd: TeacherCmd,
    },
    #[command(arg_required_else_help = true)]
    Notification {
        #[command(subcommand)]
        cmd: NotificationCmd,
    },
    #[command(arg_required_else_help = true)]
    Payment {
        #[command(subcommand)]
        cmd: PaymentCmd,
    },
    #[command(arg_required_else_help = true)]
    Report {
        #[command(subcommand)]
        cmd: ReportCmd,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    #[clap(long, default_value = "0")]
    skip: i64,
    #[clap(long, default_value = "10")]
    limit: i64,
    #[clap(long)]
    search: Option<String>,
    #[clap(long)]
    status: Option<String>,
}

#[derive(Debug, Subcommand)]
enum StudentCmd {
    List(ListArgs),
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        first_name: String,
        last_name: String,
        email: String,
        class_name: String,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        guardian: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long)]
        first_name: Option<String>,
        #[clap(long)]
        last_name: Option<String>,
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        class_name: Option<String>,
        #[clap(long)]
        status: Option<String>,
        #[clap(long)]
        guardian: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum TeacherCmd {
    List(ListArgs),
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        first_name: String,
        last_name: String,
        email: String,
        subject: String,
        #[clap(long)]
        phone: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long)]
        first_name: Option<String>,
        #[clap(long)]
        last_name: Option<String>,
        #[clap(long)]
        email: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        subject: Option<String>,
        #[clap(long)]
        status: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum NotificationCmd {
    List(ListArgs),
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        title: String,
        message: String,
        #[clap(long)]
        recipient_id: Option<i64>,
    },
    #[command(arg_required_else_help = true)]
    MarkRead {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
    /// Marks every notification read
    MarkAllRead,
    /// Deletes every notification
    ClearAll,
    #[command(arg_required_else_help = true)]
    /// Sends a notification to every recipient
    Broadcast {
        title: String,
        message: String,
    },
}

#[derive(Debug, Subcommand)]
enum PaymentCmd {
    List {
        #[clap(flatten)]
        args: ListArgs,
        /// Restrict to one student's payments
        #[clap(long)]
        student: Option<i64>,
    },
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        student_id: i64,
        amount_cents: i64,
        #[clap(long)]
        reference: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long)]
        amount_cents: Option<i64>,
        #[clap(long)]
        status: Option<String>,
        #[clap(long)]
        reference: Option<String>,
        #[clap(long)]
        paid_ts: Option<i64>,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum ReportCmd {
    List(ListArgs),
    #[command(arg_required_else_help = true)]
    Get {
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Create {
        title: String,
        category: String,
        #[clap(long)]
        summary: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Update {
        id: i64,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        category: Option<String>,
        #[clap(long)]
        summary: Option<String>,
        #[clap(long)]
        status: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Delete {
        id: i64,
    },
}

fn ensure_ok<E: Entity>(
    store: &EntityStore<E>,
    status: RequestStatus,
) -> anyhow::Result<()> {
    if status == RequestStatus::Failed {
        anyhow::bail!(store.error()
            .unwrap_or_else(|| "request failed".to_string()));
    }
    Ok(())
}

fn print_json(val: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

async fn run_list<E>(store: &EntityStore<E>, args: ListArgs) -> anyhow::Result<()>
where
    E: Entity + Serialize,
{
    if let Some(search) = args.search {
        store.set_search_query(search);
    }
    if args.status.is_some() {
        store.set_status_filter(args.status);
    }
    store.set_page_offset(args.skip);
    ensure_ok(store, store.list().await)?;
    let snapshot = store.snapshot();
    log::info!(
        "showing {} of {} record(s)",
        snapshot.collection.len(),
        snapshot.query.total,
    );
    print_json(&snapshot.collection)
}

async fn show_focus<E>(store: &EntityStore<E>, id: i64) -> anyhow::Result<()>
where
    E: Entity + Serialize,
{
    ensure_ok(store, store.get(id).await)?;
    print_json(&store.focus())
}

async fn parse_student(client: Client, cmd: StudentCmd) -> anyhow::Result<()> {
    match cmd {
        StudentCmd::List(args) => {
            let store: Arc<StudentStore> = StoreBuilder::new()
                .backend(client)
                .limit(args.limit)
                .build();
            run_list(&store, args).await
        },
        StudentCmd::Get { id } => {
            let store: Arc<StudentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            show_focus(&store, id).await
        },
        StudentCmd::Create {
            first_name,
            last_name,
            email,
            class_name,
            phone,
            guardian,
        } => {
            let store: Arc<StudentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.create(StudentCreate {
                first_name,
                last_name,
                email,
                phone,
                class_name,
                guardian,
            }).await)?;
            println!("student created");
            Ok(())
        },
        StudentCmd::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            class_name,
            status,
            guardian,
        } => {
            let store: Arc<StudentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.update(id, StudentUpdate {
                first_name,
                last_name,
                email,
                phone,
                class_name,
                status,
                guardian,
            }).await)?;
            show_focus(&store, id).await
        },
        StudentCmd::Delete { id } => {
            let store: Arc<StudentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.delete(id).await)?;
            println!("student {} deleted", id);
            Ok(())
        },
    }
}

async fn parse_teacher(client: Client, cmd: TeacherCmd) -> anyhow::Result<()> {
    match cmd {
        TeacherCmd::List(args) => {
            let store: Arc<TeacherStore> = StoreBuilder::new()
                .backend(client)
                .limit(args.limit)
                .build();
            run_list(&store, args).await
        },
        TeacherCmd::Get { id } => {
            let store: Arc<TeacherStore> = StoreBuilder::new()
                .backend(client)
                .build();
            show_focus(&store, id).await
        },
        TeacherCmd::Create {
            first_name,
            last_name,
            email,
            subject,
            phone,
        } => {
            let store: Arc<TeacherStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.create(TeacherCreate {
                first_name,
                last_name,
                email,
                phone,
                subject,
            }).await)?;
            println!("teacher created");
            Ok(())
        },
        TeacherCmd::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            subject,
            status,
        } => {
            let store: Arc<TeacherStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.update(id, TeacherUpdate {
                first_name,
                last_name,
                email,
                phone,
                subject,
                status,
            }).await)?;
            show_focus(&store, id).await
        },
        TeacherCmd::Delete { id } => {
            let store: Arc<TeacherStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.delete(id).await)?;
            println!("teacher {} deleted", id);
            Ok(())
        },
    }
}

async fn parse_notification(client: Client, cmd: NotificationCmd) -> anyhow::Result<()> {
    let mut builder = NotificationBuilder::new();
    if let NotificationCmd::List(args) = &cmd {
        builder = builder.limit(args.limit);
    }
    let store = builder
        .backend(client)
        .build();
    match cmd {
        NotificationCmd::List(args) => run_list(&store, args).await,
        NotificationCmd::Get { id } => show_focus(&store, id).await,
        NotificationCmd::Create { title, message, recipient_id } => {
            ensure_ok(&store, store.create(NotificationCreate {
                title,
                message,
                recipient_id,
            }).await)?;
            println!("notification created");
            Ok(())
        },
        NotificationCmd::MarkRead { id } => {
            ensure_ok(&store, store.update(id, NotificationUpdate {
                read: Some(true),
                ..Default::default()
            }).await)?;
            show_focus(&store, id).await
        },
        NotificationCmd::Delete { id } => {
            ensure_ok(&store, store.delete(id).await)?;
            println!("notification {} deleted", id);
            Ok(())
        },
        NotificationCmd::MarkAllRead => {
            ensure_ok(&store, store.mark_all_read().await)?;
            println!("all notifications marked read");
            Ok(())
        },
        NotificationCmd::ClearAll => {
            ensure_ok(&store, store.clear_all().await)?;
            println!("all notifications cleared");
            Ok(())
        },
        NotificationCmd::Broadcast { title, message } => {
            ensure_ok(&store, store.broadcast(NotificationBroadcast {
                title,
                message,
            }).await)?;
            println!("broadcast sent");
            Ok(())
        },
    }
}

async fn parse_payment(client: Client, cmd: PaymentCmd) -> anyhow::Result<()> {
    match cmd {
        PaymentCmd::List { args, student } => {
            let store: Arc<PaymentStore> = StoreBuilder::new()
                .backend(client)
                .limit(args.limit)
                .build();
            if let Some(student_id) = student {
                store.set_filter("student_id", student_id.to_string());
            }
            run_list(&store, args).await
        },
        PaymentCmd::Get { id } => {
            let store: Arc<PaymentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            show_focus(&store, id).await
        },
        PaymentCmd::Create { student_id, amount_cents, reference } => {
            let store: Arc<PaymentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.create(PaymentCreate {
                student_id,
                amount_cents,
                reference,
            }).await)?;
            println!("payment created");
            Ok(())
        },
        PaymentCmd::Update {
            id,
            amount_cents,
            status,
            reference,
            paid_ts,
        } => {
            let store: Arc<PaymentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.update(id, PaymentUpdate {
                amount_cents,
                status,
                reference,
                paid_ts,
            }).await)?;
            show_focus(&store, id).await
        },
        PaymentCmd::Delete { id } => {
            let store: Arc<PaymentStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.delete(id).await)?;
            println!("payment {} deleted", id);
            Ok(())
        },
    }
}

async fn parse_report(client: Client, cmd: ReportCmd) -> anyhow::Result<()> {
    match cmd {
        ReportCmd::List(args) => {
            let store: Arc<ReportStore> = StoreBuilder::new()
                .backend(client)
                .limit(args.limit)
                .build();
            run_list(&store, args).await
        },
        ReportCmd::Get { id } => {
            let store: Arc<ReportStore> = StoreBuilder::new()
                .backend(client)
                .build();
            show_focus(&store, id).await
        },
        ReportCmd::Create { title, category, summary } => {
            let store: Arc<ReportStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.create(ReportCreate {
                title,
                category,
                summary,
            }).await)?;
            println!("report created");
            Ok(())
        },
        ReportCmd::Update { id, title, category, summary, status } => {
            let store: Arc<ReportStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.update(id, ReportUpdate {
                title,
                category,
                summary,
                status,
            }).await)?;
            show_focus(&store, id).await
        },
        ReportCmd::Delete { id } => {
            let store: Arc<ReportStore> = StoreBuilder::new()
                .backend(client)
                .build();
            ensure_ok(&store, store.delete(id).await)?;
            println!("report {} deleted", id);
            Ok(())
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("smeclient")
        .module("smestore")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let mut builder = ClientBuilder::new()
        .base_url(args.api_url);
    if let Some(token) = args.api_token {
        builder = builder.token_provider(StaticToken::new(token));
    }
    let client = builder.build();

    match args.command {
        Commands::Student { cmd } => {
            parse_student(client, cmd).await?;
        },
        Commands::Teacher { cmd } => {
            parse_teacher(client, cmd).await?;
        },
        Commands::Notification { cmd } => {
            parse_notification(client, cmd).await?;
        },
        Commands::Payment { cmd } => {
            parse_payment(client, cmd).await?;
        },
        Commands::Report { cmd } => {
            parse_report(client, cmd).await?;
        },
    }
    Ok(())
}
