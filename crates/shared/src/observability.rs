//! # Observability 基盤
//!
//! タスク API のログ初期化と、ログにサービス名を載せるためのスパンを提供する。
//!
//! - [`init_tracing`]: subscriber の登録（`LOG_FORMAT` で JSON / Pretty を切り替え）
//! - [`TracingConfig::root_span`]: 起動処理を包むスパン
//! - [`ServiceRequestSpan`]: `TraceLayer` がリクエストごとに作るスパン
//!
//! どちらのスパンも `service` フィールドを持つため、JSON ログでは
//! `span.service` でサービスを絞り込める。

/// `RUST_LOG` 未設定時のフィルタ
///
/// ターゲットはクレート名（`tasklist_core_service` など）で指定する。
pub const DEFAULT_FILTER: &str =
    "info,tasklist_core_service=debug,tasklist_infra=debug,tower_http=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値からログ形式を決める
    ///
    /// 未設定なら Pretty。不正な値は stderr に警告を出して Pretty にする
    /// （subscriber 登録前なので tracing は使えない）。
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("pretty") => Self::Pretty,
            Some("json") => Self::Json,
            Some(other) => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub service_name: &'static str,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn from_env(service_name: &'static str) -> Self {
        let log_format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());
        Self {
            service_name,
            log_format,
        }
    }
}

#[cfg(feature = "observability")]
impl TracingConfig {
    /// 起動からシャットダウンまでを包むスパン
    ///
    /// `.entered()` せず、`Instrument` で future に付けて使う。
    pub fn root_span(&self) -> tracing::Span {
        tracing::info_span!("app", service = self.service_name)
    }
}

/// `TraceLayer::make_span_with` に渡すリクエストスパン生成器
///
/// 接続ごとのタスクは起動時のスパンを引き継がないため、
/// サービス名はリクエストスパン側にも持たせる。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy)]
pub struct ServiceRequestSpan {
    service_name: &'static str,
}

#[cfg(feature = "observability")]
impl ServiceRequestSpan {
    pub fn new(service_name: &'static str) -> Self {
        Self { service_name }
    }
}

#[cfg(feature = "observability")]
impl<B> tower_http::trace::MakeSpan<B> for ServiceRequestSpan {
    fn make_span(&mut self, request: &http::Request<B>) -> tracing::Span {
        tracing::info_span!(
            "request",
            service = self.service_name,
            method = %request.method(),
            uri = %request.uri(),
        )
    }
}

/// トレーシングを初期化する
///
/// `ErrorLayer` を登録するため、インフラ層のエラーが保持する `SpanTrace` に
/// リクエストスパンからの呼び出し経路が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
