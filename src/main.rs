use std::io::stdin;
use std::path::PathBuf;

use clap::Parser;
use toeic_navigator::{
    logging, Direction, Error, GroupSizes, Location, PassageCatalog, QuestionLocator, Step,
};

#[derive(Parser)]
struct Args {
    /// Part 6/7 の問題文一覧（JSON）。無ければ標準構成を使う。
    #[arg(long, env = "TOEIC_CATALOG")]
    catalog: Option<PathBuf>,
    /// 開始する設問番号
    #[arg(long, default_value_t = 1)]
    start: u32,
}

fn main() -> Result<(), Error> {
    logging::init();
    let args = Args::parse();

    let catalog = args.catalog.as_ref().map(PassageCatalog::open).transpose()?;
    let sizes = match catalog {
        Some(ref catalog) => catalog.group_sizes()?,
        None => GroupSizes::standard().clone(),
    };
    let locator = QuestionLocator::new(&sizes);

    let mut location = locator.locate(args.start)?;
    let mut buffer = String::new();
    println!("n: 次へ  p: 前へ  番号: 移動  q: 終了");

    loop {
        show(&locator, catalog.as_ref(), &location)?;
        buffer.clear();
        if stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        let step = match buffer.trim() {
            "q" => break,
            "" | "n" => locator.advance(&location, Direction::Forward),
            "p" => locator.advance(&location, Direction::Backward),
            value => match value.parse::<u32>() {
                Ok(question_no) => locator.locate(question_no).map(Step::Moved),
                Err(_) => {
                    println!("n, p, q または 1〜200 の番号を入力してください。");
                    continue;
                }
            },
        };
        match step {
            Ok(Step::Moved(next)) => location = next,
            Ok(Step::AtBoundary) => println!("これ以上移動できません。"),
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

fn show(
    locator: &QuestionLocator<'_>,
    catalog: Option<&PassageCatalog>,
    location: &Location,
) -> Result<(), Error> {
    let question_no = locator.question_number(location)?;
    println!("Q{} {} ({})", question_no, location, location.part.title());
    if let Some(question) = catalog.and_then(|catalog| catalog.sub_question(location)) {
        println!("  {}", question.content);
        for (label, choice) in ('A'..='D').zip(&question.choices) {
            println!("  ({}) {}", label, choice);
        }
    }
    Ok(())
}
