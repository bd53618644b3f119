//! Sori - 인공어 철자 -> IPA 발음 변환기

use clap::Parser;
use sori::config::{load_config, load_config_from, SoriConfig};
use sori::core::has_unknown;
use sori::phonology::{Phoneme, Phonology, PhonologyError};
use sori::{trace, transcribe};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sori")]
#[command(about = "Transcribe conlang words to IPA with ordered sound changes")]
#[command(version)]
struct Cli {
    /// Words to transcribe (reads stdin when empty)
    words: Vec<String>,

    /// Phonology JSON file (overrides the config file)
    #[arg(short, long)]
    phonology: Option<PathBuf>,

    /// Custom configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print token and rewritten phoneme sequences
    #[arg(long)]
    tokens: bool,

    /// Print the sequence after every rule pass
    #[arg(long)]
    trace: bool,

    /// Print the phoneme chart and exit
    #[arg(long)]
    chart: bool,

    /// Print the active phonology as JSON and exit
    #[arg(long)]
    export: bool,
}

/// 실행 실패 (종료 코드 1)
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("음운 체계 로드 실패: {0}")]
    Load(#[source] PhonologyError),
    #[error("잘못된 음운 체계: {0}")]
    Invalid(#[source] PhonologyError),
    #[error("내보내기 실패: {0}")]
    Export(#[source] PhonologyError),
}

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG 로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(cli, &config, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    cli: Cli,
    config: &SoriConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    // 음운 체계: 명령행 > 설정 파일 > 기본 예제
    let path = cli.phonology.as_deref().or(config.phonology_path.as_deref());
    let phonology = load_phonology(path)?;

    let written = if cli.export {
        let json = phonology.to_json_pretty().map_err(CliError::Export)?;
        writeln!(out, "{}", json)
    } else if cli.chart {
        print_chart(out, &phonology)
    } else {
        let words = if cli.words.is_empty() {
            read_words(input)
        } else {
            cli.words
        };
        let show_tokens = cli.tokens || config.show_tokens;
        let show_trace = cli.trace || config.show_trace;
        print_words(out, &words, &phonology, show_tokens, show_trace)
    };

    if let Err(e) = written {
        // 파이프가 닫힌 경우 등
        log::debug!("출력 중단: {}", e);
    }
    Ok(())
}

fn load_phonology(path: Option<&Path>) -> Result<Phonology, CliError> {
    let phonology = match path {
        Some(path) => Phonology::load(path).map_err(CliError::Load)?,
        None => Phonology::sample(),
    };
    phonology.validate().map_err(CliError::Invalid)?;
    for warning in phonology.warnings() {
        log::warn!("{}", warning);
    }
    Ok(phonology)
}

/// 공백으로 구분된 단어 읽기 (줄 단위)
fn read_words(input: impl BufRead) -> Vec<String> {
    input
        .lines()
        .map_while(Result::ok)
        .flat_map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn print_words(
    out: &mut impl Write,
    words: &[String],
    phonology: &Phonology,
    show_tokens: bool,
    show_trace: bool,
) -> io::Result<()> {
    for word in words {
        if show_trace {
            print_trace(out, word, phonology)?;
        } else {
            print_word(out, word, phonology, show_tokens)?;
        }
    }
    Ok(())
}

fn print_word(
    out: &mut impl Write,
    word: &str,
    phonology: &Phonology,
    show_tokens: bool,
) -> io::Result<()> {
    let result = transcribe(word, phonology);
    if has_unknown(&result.phonemes, &phonology.phonemes) {
        log::warn!("{}: 음소 목록에 없는 기호가 있습니다 ({})", word, result.ipa);
    }
    writeln!(out, "{}\t{}", word, result.ipa_slashed())?;
    if show_tokens {
        writeln!(out, "\ttokens: {}", result.tokens.join(" "))?;
        writeln!(out, "\tresult: {}", result.phonemes.join(" "))?;
    }
    Ok(())
}

fn print_trace(out: &mut impl Write, word: &str, phonology: &Phonology) -> io::Result<()> {
    let t = trace(word, phonology);
    writeln!(out, "{}", word)?;
    writeln!(out, "\ttokens: {}", t.tokens.join(" "))?;
    for step in &t.steps {
        writeln!(out, "\t{}", step)?;
    }
    if t.ipa.is_empty() {
        writeln!(out, "\tipa:")?;
    } else {
        writeln!(out, "\tipa: /{}/", t.ipa)?;
    }
    Ok(())
}

fn print_chart(out: &mut impl Write, phonology: &Phonology) -> io::Result<()> {
    fn labels(list: &[&Phoneme]) -> String {
        list.iter()
            .map(|p| p.chart_label())
            .collect::<Vec<_>>()
            .join("  ")
    }

    let chart = phonology.chart();
    writeln!(out, "Consonants: {}", labels(&chart.consonants))?;
    writeln!(out, "Vowels:     {}", labels(&chart.vowels))
}
