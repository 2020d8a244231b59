//! First-start seeding
//!
//! Creates the admin account, the settings singleton and a starter catalog so
//! a fresh install is usable immediately. Every step is a no-op when data is
//! already present.

use sqlx::SqlitePool;

use crate::auth::password;
use crate::core::Config;
use crate::db::repository::{admin_user, category, message, settings};
use crate::utils::{AppError, AppResult};
use shared::models::{CategoryCreate, MessageCreate};

/// Starter categories for a fresh install
const SEED_CATEGORIES: &[&str] = &[
    "Aniversário",
    "Amor",
    "Reconciliação",
    "Dia das Mães",
    "Dia dos Pais",
    "Bodas",
    "Amizade",
    "Homenagem",
    "Agradecimento",
    "Infantil",
];

/// Starter messages: (category, title, body)
const SEED_MESSAGES: &[(&str, &str, &str)] = &[
    (
        "Aniversário",
        "Aniversário – Clássica",
        "Hoje é dia de festa! Que a alegria desta data se espalhe por todo o ano. Felicidades e muitas bênçãos!",
    ),
    (
        "Amor",
        "Amor – Romântica",
        "Meu coração canta por você. Que nosso amor se faça presente em cada nota desta homenagem especial.",
    ),
    (
        "Reconciliação",
        "Reconciliação – Novo Começo",
        "Que esta mensagem seja ponte para o perdão e um recomeço cheio de respeito, carinho e esperança.",
    ),
    (
        "Bodas",
        "Bodas – Amor Eterno",
        "Celebramos o amor que atravessa o tempo. Que a união de vocês siga forte, com respeito, parceria e muitas conquistas.",
    ),
    (
        "Amizade",
        "Amizade – Parceiros de Vida",
        "Amigos são família que a vida nos permite escolher. Obrigado por caminhar comigo em cada passo.",
    ),
    (
        "Homenagem",
        "Homenagem – Com Gratidão",
        "Nossa voz ecoa para reconhecer seu esforço e dedicação. Você é inspiração para todos nós.",
    ),
    (
        "Agradecimento",
        "Agradecimento – De Coração",
        "Obrigado por fazer parte desta história. Sua presença e carinho fazem toda a diferença.",
    ),
    (
        "Infantil",
        "Infantil – Parabéns Pequeno(a) Campeão(ã)",
        "Hoje é dia de brincar, sorrir e sonhar alto! Que a alegria desta data ilumine todo o seu ano.",
    ),
];

/// Run all seed steps
pub async fn run(pool: &SqlitePool, config: &Config) -> AppResult<()> {
    seed_admin(pool, config).await?;
    settings::get_or_create(pool).await?;
    seed_catalog(pool).await?;
    Ok(())
}

async fn seed_admin(pool: &SqlitePool, config: &Config) -> AppResult<()> {
    if admin_user::find_by_email(pool, &config.admin_email)
        .await?
        .is_some()
    {
        return Ok(());
    }
    let hash = password::hash_password(&config.admin_password)
        .map_err(|e| AppError::internal(format!("Failed to hash seed password: {e}")))?;
    admin_user::create(pool, &config.admin_email, &hash).await?;
    tracing::info!(email = %config.admin_email, "Seeded admin account");
    Ok(())
}

async fn seed_catalog(pool: &SqlitePool) -> AppResult<()> {
    if !category::find_all(pool).await?.is_empty() {
        return Ok(());
    }

    for name in SEED_CATEGORIES {
        category::create(
            pool,
            CategoryCreate {
                name: (*name).to_string(),
                is_active: Some(true),
            },
        )
        .await?;
    }

    for (cat_name, title, body) in SEED_MESSAGES {
        let cat = category::find_by_name(pool, cat_name)
            .await?
            .ok_or_else(|| AppError::internal(format!("Seed category '{cat_name}' missing")))?;
        message::create(
            pool,
            MessageCreate {
                category_id: cat.id,
                title: (*title).to_string(),
                body: (*body).to_string(),
                is_active: Some(true),
            },
        )
        .await?;
    }

    tracing::info!(
        categories = SEED_CATEGORIES.len(),
        messages = SEED_MESSAGES.len(),
        "Seeded starter catalog"
    );
    Ok(())
}
