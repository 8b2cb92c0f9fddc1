//! プロバイダーレジストリ
//!
//! 起動時に設定から構築され、以後は読み取り専用で全リクエストから共有される。

use std::collections::HashSet;
use std::sync::Arc;

use bank_validator_common::{config::ProvidersConfig, error::CommonResult, types::Provider};

/// プロバイダーレジストリ
///
/// 内部は `Arc<[Provider]>` のためクローンは安価で、ロックも不要。
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Arc<[Provider]>,
}

impl ProviderRegistry {
    /// 検証済みのプロバイダー一覧からレジストリを作成
    pub fn new(providers: Vec<Provider>) -> Self {
        Self {
            providers: providers.into(),
        }
    }

    /// 設定からレジストリを作成（空・重複・不正URLはエラー）
    pub fn from_config(config: &ProvidersConfig) -> CommonResult<Self> {
        Ok(Self::new(config.to_providers()?))
    }

    /// 全プロバイダーを設定順で取得
    pub fn all(&self) -> &[Provider] {
        &self.providers
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// 空か
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// リクエストで指定されたプロバイダーに絞り込む
    pub fn filter(&self, requested: Option<&[String]>) -> Vec<Provider> {
        filter_providers(&self.providers, requested)
    }
}

/// プロバイダー一覧を名前で絞り込む
///
/// - `None`: 全プロバイダーを設定順で返す
/// - `Some(names)`: `names` に含まれるものを設定順で返す。未知の名前は無視し、
///   重複指定しても結果は重複しない。空リストなら空を返す。
pub fn filter_providers(all: &[Provider], requested: Option<&[String]>) -> Vec<Provider> {
    let Some(names) = requested else {
        return all.to_vec();
    };

    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    all.iter()
        .filter(|p| wanted.contains(p.name.as_str()))
        .cloned()
        .collect()
}
