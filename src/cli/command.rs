use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(
        about = "Map a Wikipedia page title to its Wikidata id",
        long_about = "Look up the Wikidata id of an exact page title. The title is the last part of a Wikipedia URL, unescaped, with spaces replaced by underscores, e.g. `Fermat's_Last_Theorem`."
    )]
    TitleToId {
        #[arg(value_name = "TITLE")]
        title: String,
    },
    #[command(
        about = "Map a Wikipedia URL to its Wikidata id",
        long_about = "Look up the Wikidata id for the last path segment of URL. The segment is used as-is: it is not percent-decoded and the URL is not checked against the dump the index was built from."
    )]
    UrlToId {
        #[arg(value_name = "URL")]
        url: String,
    },
    #[command(
        about = "Map a Wikidata id to a Wikipedia page title",
        long_about = "Print one Wikipedia title mapped to WIKIDATA_ID. Redirects are not resolved; when several titles share the id, the first one stored wins."
    )]
    IdToTitle {
        #[arg(value_name = "WIKIDATA_ID")]
        wikidata_id: String,
    },
    #[command(
        about = "Dump every title to Wikidata id pair",
        long_about = "Print every distinct title and Wikidata id pair whose id is set, optionally with the Wikipedia page id."
    )]
    Dump {
        #[arg(
            long = "with-page-id",
            help = "Include the Wikipedia page id of each row",
            default_value_t = false
        )]
        with_page_id: bool,
    },
}
