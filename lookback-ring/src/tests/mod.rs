mod builder;
mod counter;
mod index;
mod stats;
