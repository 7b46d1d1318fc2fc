pub mod a001_user;
pub mod a004_product;
pub mod a005_order;
pub mod a006_blog_post;
