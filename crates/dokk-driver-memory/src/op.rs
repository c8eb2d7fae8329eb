mod batch_get;
mod create_table;
mod delete;
mod get;
mod put;
mod query;
mod transact_write;
mod update;

use super::{MemoryError, Store, Table};
use crate::table::{index_key, project, ItemKey};

use dokk_core::{
    driver::{operation, Response},
    Attributes, Error, Result,
};
