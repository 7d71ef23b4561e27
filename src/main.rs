use cidr_bit_trie::load_entries;
use cidr_bit_trie::output::print_match_matrix;
use cidr_bit_trie::processing::match_matrix;
use cidr_bit_trie::MatchConfig;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let path = std::env::args().nth(1);
    let config = MatchConfig::from_env()?;
    let entries = load_entries(path.as_deref())?;

    let blocks = match_matrix(&entries, config);
    print_match_matrix(&blocks);

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
