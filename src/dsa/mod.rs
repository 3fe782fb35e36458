pub mod bitset;
pub mod graph;
pub mod path_list;
