mod enum_go;

pub use enum_go::EnumGoFile;
