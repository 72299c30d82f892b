pub mod sync_namespace;
