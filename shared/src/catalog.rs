//! Static gallery catalog
//!
//! Defined once per process and never mutated.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::models::{GalleryCategory, GalleryImage, Locale, LocalizedText};

const IMAGE_BASE: &str = "/images/gallery";

static CATALOG: LazyLock<Vec<GalleryImage>> = LazyLock::new(build_catalog);

/// All gallery images, in display order
pub fn catalog() -> &'static [GalleryImage] {
    &CATALOG
}

/// Look an image up by id
pub fn find(id: u32) -> Option<&'static GalleryImage> {
    CATALOG.iter().find(|image| image.id == id)
}

/// Images of `category`, or every image when `category` is `None`
pub fn filter_by_category(
    images: &[GalleryImage],
    category: Option<GalleryCategory>,
) -> Vec<&GalleryImage> {
    images
        .iter()
        .filter(|image| category.is_none_or(|c| image.category == c))
        .collect()
}

/// Featured images first, otherwise keeping the given order
pub fn featured_first(images: &mut [&GalleryImage]) {
    images.sort_by_key(|image| !image.featured);
}

/// Categories that have at least one image, in catalog order
pub fn categories() -> Vec<GalleryCategory> {
    let mut seen = Vec::new();
    for image in CATALOG.iter() {
        if !seen.contains(&image.category) {
            seen.push(image.category);
        }
    }
    seen
}

fn tags(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn image(
    id: u32,
    file: &str,
    category: GalleryCategory,
    caption: LocalizedText,
    story: LocalizedText,
    tag_list: &[&str],
    likes: u32,
    featured: bool,
) -> GalleryImage {
    GalleryImage {
        id,
        src: format!("{}/{}.jpg", IMAGE_BASE, file),
        thumbnail: format!("{}/thumbs/{}.jpg", IMAGE_BASE, file),
        caption,
        story,
        category,
        tags: tags(tag_list),
        likes,
        featured,
    }
}

fn build_catalog() -> Vec<GalleryImage> {
    use GalleryCategory::*;

    vec![
        image(
            1,
            "seafood-paella",
            Dishes,
            LocalizedText::new("Seafood paella")
                .with(Locale::Es, "Paella de marisco")
                .with(Locale::Fr, "Paella aux fruits de mer"),
            LocalizedText::new("Cooked over an open flame every Sunday, from the family recipe.")
                .with(Locale::Es, "Cocinada a fuego abierto cada domingo, con la receta familiar."),
            &["rice", "seafood", "signature"],
            248,
            true,
        ),
        image(
            2,
            "dining-room",
            Interior,
            LocalizedText::new("The main dining room")
                .with(Locale::Es, "El comedor principal")
                .with(Locale::Fr, "La salle principale"),
            LocalizedText::new("Forty seats under the original oak beams of the old mill."),
            &["ambience", "evening"],
            131,
            false,
        ),
        image(
            3,
            "chef-at-the-pass",
            Kitchen,
            LocalizedText::new("Chef at the pass").with(Locale::Es, "El chef en el pase"),
            LocalizedText::new("Every plate is checked before it leaves the kitchen.")
                .with(Locale::Es, "Cada plato se revisa antes de salir de la cocina."),
            &["team", "behind-the-scenes"],
            97,
            false,
        ),
        image(
            4,
            "wedding-terrace",
            Events,
            LocalizedText::new("Wedding on the terrace")
                .with(Locale::Es, "Boda en la terraza")
                .with(Locale::Fr, "Mariage en terrasse"),
            LocalizedText::new("The terrace hosts up to 120 guests for private celebrations."),
            &["catering", "wedding", "outdoor"],
            312,
            true,
        ),
        image(
            5,
            "burnt-cheesecake",
            Dishes,
            LocalizedText::new("Burnt Basque cheesecake")
                .with(Locale::Es, "Tarta de queso vasca"),
            LocalizedText::new("Caramelised outside, barely set inside."),
            &["dessert", "signature"],
            205,
            false,
        ),
        image(
            6,
            "wine-cellar",
            Interior,
            LocalizedText::new("The wine cellar").with(Locale::Es, "La bodega"),
            LocalizedText::new("Three hundred labels, mostly from small regional producers."),
            &["wine", "ambience"],
            88,
            false,
        ),
        image(
            7,
            "corporate-dinner",
            Events,
            LocalizedText::new("Corporate dinner").with(Locale::Es, "Cena de empresa"),
            LocalizedText::new("Tasting menus for teams, with a private room and sommelier."),
            &["catering", "corporate"],
            64,
            false,
        ),
        image(
            8,
            "morning-prep",
            Kitchen,
            LocalizedText::new("Morning prep").with(Locale::Fr, "Mise en place du matin"),
            LocalizedText::new("Stocks go on at seven; bread comes out at eleven."),
            &["team", "behind-the-scenes", "bread"],
            73,
            false,
        ),
    ]
}
