use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 拡張 ctags 形式
    Ctags,
    Json,
    Jsonl,
    /// 人が読むための表形式
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum SortKey {
    /// タグ名順（ソート済みタグファイル）
    Name,
    /// ファイル順、ファイル内は出現順
    File,
    /// 種別順、同種別内はタグ名順
    Kind,
}
