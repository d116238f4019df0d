//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a talk together with the camp and speaker it needs.
///
/// All entities are created with default values. Use the individual factories to
/// customize specific entities.
///
/// # Returns
/// - `Ok((camp, speaker, talk))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_talk_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::camp::Model,
        entity::speaker::Model,
        entity::talk::Model,
    ),
    DbErr,
> {
    let camp = crate::factory::camp::create_camp(db).await?;
    let speaker = crate::factory::speaker::create_speaker(db).await?;
    let talk = crate::factory::talk::create_talk(db, camp.id, speaker.id).await?;

    Ok((camp, speaker, talk))
}
