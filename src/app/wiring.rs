use crate::{context, storage::MemoryStore};

pub fn init_store(ctx: &context::Context) -> MemoryStore {
    MemoryStore::with_policy(ctx.policy)
}

pub fn log_startup_info(ctx: &context::Context) {
    log::info!("🚀 Starting ufo");
    log::info!("🌐 Listen address: {}", ctx.listen);
    log::info!(
        "🧹 Store policy: update_deleted={}, redelete={}",
        ctx.policy.update_deleted,
        ctx.policy.redelete
    );
    if let Some(path) = ctx.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.to_string_lossy());
    }
}
