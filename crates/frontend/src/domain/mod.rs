pub mod product_specs;
