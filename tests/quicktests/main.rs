mod array;
mod list;
mod tree;
