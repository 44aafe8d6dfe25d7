pub mod add;
pub mod draw;
pub mod export_geojson;
pub mod import_geojson;
pub mod locate;
pub mod move_item;
pub mod new;
pub mod remove;
pub mod show;
pub mod toggle;
pub mod upgrade;
