use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use axum_ewaste_api::{
    config::AppConfig,
    db::create_pool,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "admin@example.com", "admin123").await?;
    let user_id = ensure_user(&pool, "user@example.com", "user123").await?;
    seed_facilities(&pool).await?;
    seed_brands(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_admin(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, email, password, "admin").await
}

async fn ensure_user(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, email, password, "user").await
}

async fn ensure_user_with_role(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let name = email.split('@').next().unwrap_or("user");

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, name, email, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_facilities(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let facilities = vec![
        (
            "GreenCycle Hub",
            "Plot 14, MIDC Industrial Area, Pune",
            500,
            73.8567,
            18.5204,
            "+91 98220 11223",
            "Mon-Sat 9:00-18:00",
            true,
        ),
        (
            "EcoDrop Collection Center",
            "22 Residency Road, Bengaluru",
            300,
            77.5946,
            12.9716,
            "+91 99000 44556",
            "Mon-Fri 10:00-17:00",
            true,
        ),
        (
            "ReNew E-Waste Point",
            "5 Salt Lake Sector V, Kolkata",
            200,
            88.4285,
            22.5726,
            "+91 98300 77889",
            "Tue-Sun 9:30-18:30",
            false,
        ),
    ];

    for (name, address, capacity, longitude, latitude, contact, hours, verified) in facilities {
        sqlx::query(
            r#"
            INSERT INTO facilities (id, name, address, capacity, longitude, latitude, contact, hours, verified)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(capacity)
        .bind(longitude)
        .bind(latitude)
        .bind(contact)
        .bind(hours)
        .bind(verified)
        .execute(pool)
        .await?;
    }

    println!("Seeded facilities");
    Ok(())
}

async fn seed_brands(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let catalogs = vec![
        ("smartphone", "Samsung", vec!["Galaxy S23", "Galaxy S22", "Galaxy A54"]),
        ("smartphone", "Apple", vec!["iPhone 15", "iPhone 14", "iPhone SE"]),
        ("smartphone", "OnePlus", vec!["OnePlus 12", "OnePlus 11R", "Nord CE 3"]),
        ("laptop", "Dell", vec!["XPS 13", "Inspiron 15", "Latitude 7440"]),
        ("laptop", "HP", vec!["Pavilion 14", "EliteBook 840", "Omen 16"]),
        ("laptop", "Lenovo", vec!["ThinkPad X1", "IdeaPad Slim 5", "Legion 5"]),
        ("accessories", "boAt", vec!["Airdopes 141", "Rockerz 450", "Stone 650"]),
        ("accessories", "JBL", vec!["Tune 510BT", "Flip 6", "Go 3"]),
        ("television", "LG", vec!["OLED C3", "UR7500", "NanoCell 75"]),
        ("television", "Sony", vec!["Bravia X74L", "Bravia X90L"]),
        ("refrigerator", "Whirlpool", vec!["IntelliFresh 278", "Neo 258"]),
        ("refrigerator", "Godrej", vec!["Edge 205", "Eon 244"]),
    ];

    for (category, brand, models) in catalogs {
        sqlx::query(
            r#"
            INSERT INTO brands (id, category, brand, models)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (category, brand) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(category)
        .bind(brand)
        .bind(serde_json::json!(models))
        .execute(pool)
        .await?;
    }

    println!("Seeded brand catalogs");
    Ok(())
}
