pub mod materials;

pub use materials::MaterialService;
