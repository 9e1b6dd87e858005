pub mod naming;
pub mod reconcile;
pub mod restrict;
pub mod selection;
pub mod settings;
pub mod substitute;
pub mod template;
pub mod tokenizer;
pub mod validate;
pub mod work_item;
