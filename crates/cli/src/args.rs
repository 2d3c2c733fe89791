// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};
use scss_tags_core::KindSet;

use crate::options::{OutputFormat, SortKey};
use crate::parsers::{SizeArg, parse_key_val, parse_usize_1_to_512};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "scss_tags",
    version = crate::VERSION,
    about = "CSS/SCSS のクラス・ID・セレクタからタグファイルを生成するツール"
)]
pub struct Args {
    /// 対象のファイルまたはディレクトリ（省略時はカレントディレクトリ）
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "ctags", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力するタグ種別（文字: cis / 名前: class,id）
    #[arg(long, default_value = "cis", help_heading = "出力")]
    pub kinds: KindSet,

    /// 並び順
    #[arg(long, value_enum, default_value = "name", help_heading = "出力")]
    pub sort: SortKey,

    /// 標準出力の代わりにファイルへ書き出す
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// タグ種別の一覧を表示して終了
    #[arg(long, help_heading = "出力")]
    pub list_kinds: bool,
}

#[derive(ClapArgs, Debug)]
pub struct FilterArgs {
    /// 拡張子フィルタ（カンマ区切り/複数指定可, 例: --ext css,scss）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 拡張子の読み替え（例: --map-ext less=css）
    #[arg(long = "map-ext", value_parser = parse_key_val, help_heading = "フィルタ")]
    pub map_ext: Vec<(String, String)>,

    /// 最大ファイルサイズ (例: 10K, 5MiB)
    #[arg(long, help_heading = "フィルタ")]
    pub max_size: Option<SizeArg>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// 含めるパターン（gitignore 互換、カンマ区切り/複数指定可）
    #[arg(long = "include", value_delimiter = ',', help_heading = "走査/入力")]
    pub override_include: Vec<String>,

    /// 除外するパターン（gitignore 互換、カンマ区切り/複数指定可）
    #[arg(long = "exclude", value_delimiter = ',', help_heading = "走査/入力")]
    pub override_exclude: Vec<String>,

    /// 隠しファイルも対象
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore を無視して巡回
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// ディレクトリ探索の最大深さ
    #[arg(long = "max-depth", help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 並列数（1..=512）
    #[arg(short, long, value_parser = parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorArgs {
    /// 最初のエラーで中断
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ログを詳しく（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}

impl BehaviorArgs {
    /// Default filter directive when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
