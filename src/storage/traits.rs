use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleMapping {
    pub title: String,
    pub wikidata_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMapping {
    pub page_id: Option<i64>,
    pub title: String,
    pub wikidata_id: String,
}

impl From<PageMapping> for TitleMapping {
    fn from(value: PageMapping) -> Self {
        Self {
            title: value.title,
            wikidata_id: value.wikidata_id,
        }
    }
}

/// Read-only queries against a title <-> Wikidata id index.
pub trait MappingReader {
    /// Wikidata id for an exact page title, e.g. `Fermat's_Last_Theorem`.
    ///
    /// The title is the last segment of a Wikipedia URL, unescaped, with
    /// spaces replaced by underscores. No normalization happens here.
    fn title_to_id(&self, page_title: &str) -> Result<Option<String>>;

    /// Convenience wrapper that looks up the last path segment of `url`.
    ///
    /// It is not checked whether the URL and the index come from the same dump,
    /// and the segment is not percent-decoded.
    fn url_to_id(&self, url: &str) -> Result<Option<String>> {
        self.title_to_id(title_from_url(url))
    }

    /// One title mapped to `wikidata_id`, ignoring redirects.
    ///
    /// When several titles share the id the first row SQLite yields wins.
    fn id_to_title(&self, wikidata_id: &str) -> Result<Option<String>>;

    fn full_mapping(&self) -> Result<Vec<TitleMapping>>;

    fn full_mapping_with_page_id(&self) -> Result<Vec<PageMapping>>;
}

pub fn title_from_url(url: &str) -> &str {
    url.rsplit_once('/').map_or(url, |(_, title)| title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_url_takes_last_segment() {
        assert_eq!(
            title_from_url("https://en.wikipedia.org/wiki/Manatee"),
            "Manatee"
        );
        assert_eq!(
            title_from_url("https://en.wikipedia.org/wiki/Fermat%27s_Last_Theorem"),
            "Fermat%27s_Last_Theorem"
        );
    }

    #[test]
    fn title_from_url_without_slash_is_identity() {
        assert_eq!(title_from_url("Manatee"), "Manatee");
    }

    #[test]
    fn title_from_url_trailing_slash_is_empty() {
        assert_eq!(title_from_url("https://en.wikipedia.org/wiki/"), "");
    }

    #[test]
    fn page_mapping_projects_onto_title_mapping() {
        let page = PageMapping {
            page_id: Some(1),
            title: "Manatee".into(),
            wikidata_id: "Q82893".into(),
        };
        assert_eq!(
            TitleMapping::from(page),
            TitleMapping {
                title: "Manatee".into(),
                wikidata_id: "Q82893".into(),
            }
        );
    }
}
