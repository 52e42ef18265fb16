use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use todosapp_cli::admin::{ADMIN_ROLE, create_admin};
use todosapp_cli::seeder::{self, SEED_PASSWORD, SeedConfig};
use todosapp_config::{DatabaseConfig, PasswordConfig};
use todosapp_db::{init_db_pool, run_migrations};
use todosapp_models::CreateUserDto;

#[derive(Parser)]
#[command(name = "todosapp-cli")]
#[command(about = "Todosapp CLI - Administrative tools for Todosapp", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create an administrator account
    CreateAdmin {
        #[arg(short = 'u', long)]
        username: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        #[arg(short = 'f', long)]
        first_name: Option<String>,

        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        #[arg(long)]
        phone_number: Option<String>,
    },
    /// Seed the database with fake users and todos
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of todos per user
        #[arg(short = 't', long, default_value = "5")]
        todos: usize,
    },
    /// Delete seeded users and their todos
    ClearSeed,
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(label).interact_text()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateAdmin {
            username,
            email,
            first_name,
            last_name,
            password,
            phone_number,
        } => {
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            let account = CreateUserDto {
                username: prompt(username, "Username")?,
                email: prompt(email, "Email address")?,
                first_name: prompt(first_name, "First name")?,
                last_name: prompt(last_name, "Last name")?,
                password,
                role: ADMIN_ROLE.to_string(),
                phone_number,
            };

            handle_create_admin(&pool, account).await
        }
        Commands::Seed { users, todos } => {
            let config = SeedConfig::new(users).with_todos_per_user(todos);
            seeder::seed_all(&pool, config).await?;
            println!("   Seeded accounts use the password '{}'", SEED_PASSWORD);
            Ok(())
        }
        Commands::ClearSeed => {
            seeder::clear_all(&pool).await?;
            Ok(())
        }
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_admin(pool: &PgPool, account: CreateUserDto) -> anyhow::Result<()> {
    let bcrypt_cost = PasswordConfig::from_env()?.bcrypt_cost;
    let username = account.username.clone();
    let email = account.email.clone();

    let user_id = create_admin(pool, account, bcrypt_cost).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {}", user_id);
    println!("   Username: {}", username);
    println!("   Email: {}", email);
    Ok(())
}
