//! First-boot sample data
//!
//! Each table is filled only while it is empty, so restarts never duplicate
//! rows and a table emptied by hand is refilled on the next boot.

use catalog::PLACEHOLDER_IMAGE;
use platform::password::ClearTextPassword;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

const SEED_PASSWORD: &str = "password";

const USERS: [(&str, &str, &str); 2] = [
    ("admin", "admin@stroystore.ru", "admin"),
    ("user1", "user1@example.ru", "user"),
];

const PRODUCTS: [(&str, &str, Decimal, &str); 8] = [
    ("Перфоратор", "Мощный перфоратор для строительных работ", dec!(15000.00), "Электроинструменты"),
    ("Шуруповерт", "Аккумуляторный шуруповерт", dec!(8000.00), "Электроинструменты"),
    ("Бетономешалка", "Бетономешалка на 150 литров", dec!(25000.00), "Строительное оборудование"),
    ("Строительные перчатки", "Защитные перчатки", dec!(500.00), "СИЗ"),
    ("Защитные очки", "Строительные защитные очки", dec!(300.00), "СИЗ"),
    ("Молоток", "Профессиональный строительный молоток", dec!(1500.00), "Ручные инструменты"),
    ("Дрель", "Беспроводная дрель", dec!(12000.00), "Электроинструменты"),
    ("Строительная каска", "Защитная каска", dec!(800.00), "СИЗ"),
];

/// (title, description, salary, category, company); all owned by `user1`
const JOBS: [(&str, &str, &str, &str, &str); 5] = [
    ("Строитель", "Работа на строительном объекте", "80000 ₽", "Строительство", "СтройГрупп"),
    ("Отделочник", "Отделочные работы", "75000 ₽", "Отделка", "РемонтПро"),
    ("Электрик", "Электромонтажные работы", "90000 ₽", "Электрика", "ЭлектроСервис"),
    ("Сантехник", "Монтаж сантехнического оборудования", "85000 ₽", "Сантехника", "АкваПроф"),
    ("Маляр", "Покрасочные работы", "70000 ₽", "Отделка", "ИнтерьерСтрой"),
];

pub async fn run(pool: &PgPool) -> anyhow::Result<()> {
    seed_users(pool).await?;
    seed_products(pool).await?;
    seed_jobs(pool).await?;
    Ok(())
}

async fn is_empty(pool: &PgPool, table: &str) -> sqlx::Result<bool> {
    let query = format!("SELECT NOT EXISTS (SELECT 1 FROM {table})");
    sqlx::query_scalar::<_, bool>(&query).fetch_one(pool).await
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<()> {
    if !is_empty(pool, "users").await? {
        return Ok(());
    }

    let password_hash = ClearTextPassword::new(SEED_PASSWORD.to_string())?.hash()?;

    let mut tx = pool.begin().await?;
    for (username, email, role) in USERS {
        sqlx::query("INSERT INTO users (username, email, password_hash, role) VALUES ($1, $2, $3, $4)")
            .bind(username)
            .bind(email)
            .bind(password_hash.as_phc_string())
            .bind(role)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(count = USERS.len(), "Seeded users");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> anyhow::Result<()> {
    if !is_empty(pool, "products").await? {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (name, description, price, category) in PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, description, price, category, image) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category)
        .bind(PLACEHOLDER_IMAGE)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = PRODUCTS.len(), "Seeded products");
    Ok(())
}

async fn seed_jobs(pool: &PgPool) -> anyhow::Result<()> {
    if !is_empty(pool, "jobs").await? {
        return Ok(());
    }

    let owner_id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = 'user1'")
        .fetch_optional(pool)
        .await?;
    let Some(owner_id) = owner_id else {
        tracing::warn!("Sample job owner user1 is missing, skipping job seed");
        return Ok(());
    };

    let mut tx = pool.begin().await?;
    for (title, description, salary, category, company) in JOBS {
        sqlx::query(
            r#"
            INSERT INTO jobs (title, description, salary, category, company, user_id, approved)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(salary)
        .bind(category)
        .bind(company)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count = JOBS.len(), "Seeded approved jobs");
    Ok(())
}
