use log::{debug, info};
use scraper::{ElementRef, Html, Selector};

use super::text::element_text;
use crate::core::vacancy::{FALLBACK_CITY, FALLBACK_INFO, FALLBACK_SALARY, FALLBACK_TITLE};
use crate::core::{ScraperError, ScraperResult, VacancyRecord};
use crate::parser::Parser;

const CONTAINER: &str = "li.l-vacancy";
const TITLE: &str = "a.vt";
const CITY: &str = "span.cities";
const SALARY: &str = "span.salary";
const INFO: &str = "div.sh-info";

fn compile(css: &str) -> ScraperResult<Selector> {
    Selector::parse(css)
        .map_err(|e| ScraperError::ExtractionError(format!("invalid selector '{}': {}", css, e)))
}

#[derive(Debug, Clone)]
pub struct VacancySelectors {
    pub container: Selector,
    pub title: Selector,
    pub city: Selector,
    pub salary: Selector,
    pub info: Selector,
}

impl VacancySelectors {
    pub fn new() -> ScraperResult<Self> {
        Ok(Self {
            container: compile(CONTAINER)?,
            title: compile(TITLE)?,
            city: compile(CITY)?,
            salary: compile(SALARY)?,
            info: compile(INFO)?,
        })
    }
}

/// Extracts vacancies from a DOU category listing page.
///
/// Every `li.l-vacancy` yields exactly one record. A field that is missing
/// from the markup is replaced by its fallback text, so a malformed entry is
/// never dropped.
#[derive(Debug, Clone)]
pub struct VacancyParser {
    selectors: VacancySelectors,
}

impl VacancyParser {
    pub fn new() -> ScraperResult<Self> {
        Ok(Self {
            selectors: VacancySelectors::new()?,
        })
    }

    fn parse_listing(&self, index: usize, item: ElementRef<'_>) -> VacancyRecord {
        let (title, link) = match item.select(&self.selectors.title).next() {
            Some(anchor) => (
                element_text(anchor),
                anchor.value().attr("href").unwrap_or_default().to_string(),
            ),
            None => {
                debug!("Listing #{}: no title anchor, using fallback", index);
                (FALLBACK_TITLE.to_string(), String::new())
            }
        };

        let city = self.field_or(index, item, &self.selectors.city, "city", FALLBACK_CITY);
        let salary = self.field_or(index, item, &self.selectors.salary, "salary", FALLBACK_SALARY);
        let info = self
            .field_or(index, item, &self.selectors.info, "info", FALLBACK_INFO)
            .replace('\n', "");

        VacancyRecord::new(title, city, salary, info, link)
    }

    fn field_or(
        &self,
        index: usize,
        item: ElementRef<'_>,
        selector: &Selector,
        name: &str,
        fallback: &str,
    ) -> String {
        match item.select(selector).next() {
            Some(element) => element_text(element),
            None => {
                debug!("Listing #{}: no {} element, using fallback", index, name);
                fallback.to_string()
            }
        }
    }
}

impl Parser for VacancyParser {
    fn parse(&self, body: &str) -> Vec<VacancyRecord> {
        let document = Html::parse_document(body);

        let records: Vec<VacancyRecord> = document
            .select(&self.selectors.container)
            .enumerate()
            .map(|(index, item)| self.parse_listing(index, item))
            .collect();

        info!("Parsed {} vacancies", records.len());
        records
    }
}
