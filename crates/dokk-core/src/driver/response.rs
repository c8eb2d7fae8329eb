use crate::{Attributes, Error, Result};

#[derive(Debug)]
pub enum Response {
    /// A write completed
    Empty,

    /// Result of a single-item read; `None` when the item does not exist
    Item(Option<Attributes>),

    /// One page of a query
    Page(Page),

    /// Result of a batch get
    BatchGet(BatchGetPage),
}

#[derive(Debug, Default)]
pub struct Page {
    pub items: Vec<Attributes>,

    /// Key to resume the query from. `None` once the range is exhausted.
    pub last_evaluated_key: Option<Attributes>,
}

#[derive(Debug, Default)]
pub struct BatchGetPage {
    pub items: Vec<Attributes>,

    /// Keys the store did not get to, as key attribute maps.
    pub unprocessed_keys: Vec<Attributes>,
}

impl Response {
    pub fn item(item: Option<Attributes>) -> Response {
        Response::Item(item)
    }

    pub fn page(items: Vec<Attributes>, last_evaluated_key: Option<Attributes>) -> Response {
        Response::Page(Page {
            items,
            last_evaluated_key,
        })
    }

    pub fn batch_get(items: Vec<Attributes>, unprocessed_keys: Vec<Attributes>) -> Response {
        Response::BatchGet(BatchGetPage {
            items,
            unprocessed_keys,
        })
    }

    pub fn into_empty(self) -> Result<()> {
        match self {
            Response::Empty => Ok(()),
            other => Err(unexpected("an empty response", &other)),
        }
    }

    pub fn into_item(self) -> Result<Option<Attributes>> {
        match self {
            Response::Item(item) => Ok(item),
            other => Err(unexpected("an item", &other)),
        }
    }

    pub fn into_page(self) -> Result<Page> {
        match self {
            Response::Page(page) => Ok(page),
            other => Err(unexpected("a query page", &other)),
        }
    }

    pub fn into_batch_get(self) -> Result<BatchGetPage> {
        match self {
            Response::BatchGet(page) => Ok(page),
            other => Err(unexpected("a batch get result", &other)),
        }
    }

    fn variant(&self) -> &'static str {
        match self {
            Response::Empty => "empty",
            Response::Item(_) => "item",
            Response::Page(_) => "page",
            Response::BatchGet(_) => "batch get",
        }
    }
}

fn unexpected(expected: &str, actual: &Response) -> Error {
    Error::invalid_response(format!(
        "expected {expected}, got a {} response",
        actual.variant()
    ))
}
