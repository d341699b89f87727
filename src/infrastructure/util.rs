use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugs via the `slug` crate: transliterated to ASCII, lowercased, runs of
/// anything else collapsed to a single `-`, no leading or trailing `-`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
