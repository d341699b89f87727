// src/application/ports/util.rs

/// Turns free text into a lowercase, hyphen-separated, URL-safe token.
/// Must be deterministic and idempotent.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
