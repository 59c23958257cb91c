use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use toeic_navigator::{
    logging, read_bulk, report_line, Error, GroupSizes, PassageCatalog, QuestionLocator,
};

#[derive(Parser)]
struct Args {
    /// 回答記録CSV（submission_id,question_number）
    path: PathBuf,
    /// 進捗率の分母
    #[arg(long, default_value_t = 200)]
    total: u32,
    /// Part 6/7 の問題文一覧（JSON）
    #[arg(long, env = "TOEIC_CATALOG")]
    catalog: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    logging::init();
    let args = Args::parse();

    let sizes = match args.catalog {
        Some(ref path) => PassageCatalog::open(path)?.group_sizes()?,
        None => GroupSizes::standard().clone(),
    };
    let locator = QuestionLocator::new(&sizes);

    let reader = BufReader::new(File::open(&args.path)?);
    for (id, answered) in read_bulk(reader)? {
        println!("{}", report_line(&id, &answered, &locator, args.total)?);
    }
    Ok(())
}
