pub mod favorite_entry;
pub mod favorites_store;

pub use favorite_entry::FavoriteEntry;
pub use favorites_store::FavoritesStore;
