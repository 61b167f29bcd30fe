// src/ui/session.rs

/// Runs `run`, then `restore` whatever `run` returned. The first error wins.
pub fn guarded<T, E>(run: impl FnOnce() -> Result<T, E>, restore: impl FnOnce() -> Result<(), E>) -> Result<T, E> {
    let result = run();
    let restored = restore();
    match (result, restored) {
        (Err(e), _) => Err(e),
        (Ok(_), Err(e)) => Err(e),
        (Ok(value), Ok(())) => Ok(value),
    }
}
