pub mod item_count_refresher;
