use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "subscription-value",
    version,
    about = "サブスクリプションを管理し、1回あたりの実質コストを確認する"
)]
pub struct Cli {
    /// ローカルデータストアを置くディレクトリ
    #[arg(long, env = "DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// サブスクリプションを追加
    Add {
        /// サービス名
        #[arg(short, long)]
        name: String,

        /// 支払いサイクルごとの料金
        #[arg(short, long)]
        cost: f64,

        /// 支払いサイクル: monthly, annually
        #[arg(short = 'b', long, default_value = "monthly")]
        cycle: String,

        /// 頻度の期間あたりの利用回数
        #[arg(short, long, default_value = "0")]
        usage: f64,

        /// 利用頻度: per-day, per-week, per-month
        #[arg(short, long, default_value = "per-month")]
        frequency: String,

        /// 料金の通貨（省略時はUSD）
        #[arg(long)]
        currency: Option<String>,
    },

    /// サービスカタログからサブスクリプションを追加
    QuickAdd {
        /// カタログのサービス名
        service: String,

        /// 複数プランがあるサービスのプラン名
        #[arg(short, long)]
        tier: Option<String>,

        /// 月あたりの利用回数
        #[arg(short, long, default_value = "0")]
        usage: f64,
    },

    /// 既存のサブスクリプションを編集
    Edit {
        /// サブスクリプションID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        cost: Option<f64>,

        #[arg(short = 'b', long)]
        cycle: Option<String>,

        #[arg(short, long)]
        usage: Option<f64>,

        #[arg(short, long)]
        frequency: Option<String>,

        #[arg(long)]
        currency: Option<String>,
    },

    /// サブスクリプションを削除
    Delete {
        /// サブスクリプションID
        id: String,
    },

    /// 1回あたりコストと評価付きの一覧（既定のコマンド）
    List {
        /// 登録順ではなく1回あたりコストの安い順に並べる
        #[arg(short, long)]
        ranked: bool,
    },

    /// 月額・年額・日額の合計とベスト・ワーストを表示
    Summary,

    /// サービスカタログを表示
    Catalog {
        /// サービス名・カテゴリ名で絞り込む
        #[arg(short, long, default_value = "")]
        search: String,

        /// 指定カテゴリのみ表示
        #[arg(short, long)]
        category: Option<String>,

        /// 並び順: name, price-low, price-high, category
        #[arg(long, default_value = "name")]
        sort: String,

        /// カテゴリ一覧のみ表示
        #[arg(long)]
        categories: bool,
    },

    /// 表示通貨の確認・変更
    Currency {
        /// 切り替え先の通貨コード
        code: Option<String>,
    },

    /// テーマの確認・変更
    Theme {
        /// light / dark / toggle
        value: Option<String>,
    },

    /// 為替レートを表示
    Rates {
        /// 表示前に最新レートを取得する
        #[arg(short, long)]
        refresh: bool,
    },

    /// 全データをJSONでエクスポート
    Export {
        /// 標準出力ではなくファイルに書き出す
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// エクスポートしたJSONをインポート（既存データは置き換え）
    Import {
        /// エクスポートしたJSONファイル
        file: PathBuf,

        /// 既存データの置き換えを確認済みとする
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    /// 実行するコマンドを取得する（未指定ならList）
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::List { ranked: false })
    }
}
