//! Catalog query building.
//!
//! The catalog API takes CRUD-style query parameters: `filter=field||$op||value`
//! (repeatable) and `sort=field,DIRECTION`. A [`ProductTopic`] names one of the
//! storefront's product rows and maps to those parameters.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::util::format::encode_query_component;

/// Products per page for storefront rows.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// A product listing the storefront knows how to request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductTopic {
    All,
    OnSale,
    InterestFree,
    Recent,
    WellRated,
    /// Products cheaper than the given whole amount in reais.
    UnderPrice(u32),
    Category(i64),
    Search(String),
}

impl ProductTopic {
    /// Portuguese row title shown above the product list.
    pub fn title(&self) -> String {
        match self {
            Self::All => "Todos os livros".to_owned(),
            Self::OnSale => "Ofertas".to_owned(),
            Self::InterestFree => "Parcelamento sem juros".to_owned(),
            Self::Recent => "Adicionados recentemente".to_owned(),
            Self::WellRated => "Bem avaliados".to_owned(),
            Self::UnderPrice(limit) => {
                format!("Por menos de R$ {}", crate::util::format::format_price(f64::from(*limit)))
            }
            Self::Category(_) => "Categoria".to_owned(),
            Self::Search(term) => format!("Resultados para \"{term}\""),
        }
    }

    fn filters(&self) -> Vec<String> {
        match self {
            Self::All | Self::Recent => Vec::new(),
            Self::OnSale => vec!["isOnSale||$eq||true".to_owned()],
            Self::InterestFree => vec!["installments||$gt||1".to_owned()],
            Self::WellRated => vec!["rating||$gte||4".to_owned()],
            Self::UnderPrice(limit) => vec![format!("price||$lt||{limit}")],
            Self::Category(id) => vec![format!("categoryId||$eq||{id}")],
            Self::Search(term) => vec![format!("name||$cont||{}", term.trim())],
        }
    }

    fn sort(&self) -> Option<&'static str> {
        match self {
            Self::Recent => Some("createdAt,DESC"),
            Self::WellRated => Some("rating,DESC"),
            Self::UnderPrice(_) => Some("price,ASC"),
            _ => None,
        }
    }
}

/// One page of a [`ProductTopic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub topic: ProductTopic,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub offset: u32,
}

impl ProductQuery {
    pub fn new(topic: ProductTopic) -> Self {
        Self { topic, page: 1, limit: DEFAULT_PAGE_SIZE, offset: 0 }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
            format!("offset={}", self.offset),
        ];
        for filter in self.topic.filters() {
            params.push(format!("filter={}", encode_query_component(&filter)));
        }
        if let Some(sort) = self.topic.sort() {
            params.push(format!("sort={}", encode_query_component(sort)));
        }
        params.join("&")
    }
}
