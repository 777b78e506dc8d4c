//! Gallery categories and their photos.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use carousel::sequence::ImageSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCategory {
    pub name: &'static str,
    pub images: &'static [GalleryImage],
}

impl GalleryCategory {
    /// A fresh sequence over this category's photos.
    pub fn sequence(&self) -> ImageSequence {
        ImageSequence::new(self.images.iter().map(|image| image.src))
    }
}

pub const DEFAULT_CATEGORY: &str = "na zewnątrz";

const fn image(src: &'static str, alt: &'static str) -> GalleryImage {
    GalleryImage { src, alt }
}

pub const GALLERY: &[GalleryCategory] = &[
    GalleryCategory {
        name: "na zewnątrz",
        images: &[
            image("/img/outside10.jpg", "Na zewnątrz 1"),
            image("/img/outside11.jpg", "Na zewnątrz 2"),
            image("/img/outside12.jpg", "Na zewnątrz 3"),
            image("/img/outside13.jpg", "Na zewnątrz 4"),
        ],
    },
    GalleryCategory {
        name: "salon",
        images: &[
            image("/img/living1.jpg", "Salon 1"),
            image("/img/living2.jpg", "Salon 2"),
            image("/img/living3.jpg", "Salon 3"),
            image("/img/living4.jpg", "Salon 4"),
            image("/img/living5.jpg", "Salon 5"),
        ],
    },
    GalleryCategory {
        name: "pokoje",
        images: &[image("/img/room1.jpg", "Pokój 1"), image("/img/room2.jpg", "Pokój 2")],
    },
    GalleryCategory { name: "taras", images: &[image("/img/taras.jpg", "Taras")] },
    GalleryCategory { name: "sauna", images: &[image("/img/sauna1.jpg", "Sauna")] },
    GalleryCategory { name: "jacuzzi", images: &[image("/img/jacuzzi.jpg", "Jacuzzi")] },
];

/// Look up a category by its chip label.
pub fn gallery_category(name: &str) -> Option<&'static GalleryCategory> {
    GALLERY.iter().find(|category| category.name == name)
}

pub fn category_names() -> Vec<&'static str> {
    GALLERY.iter().map(|category| category.name).collect()
}
