//! リクエストモデル定義

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// 形態素解析リクエスト
///
/// ```json
/// { "Token": "01234", "Sentence": "すもももももももものうち" }
/// ```
///
/// デコード規則:
/// - フィールド名は ASCII の大文字小文字を区別しない（`SENTENCE`, `sentence` も可）
/// - 同じフィールドが複数回現れた場合は後勝ち
/// - 欠落したフィールドは空文字列、`null` の値は直前の値を変えない
/// - 未知のフィールドは無視する
/// - トップレベルの `null` は全フィールド空のリクエストになる
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
  /// 呼び出し元が付与する識別子（現在は未使用）
  pub token: String,
  /// 解析対象の文
  pub sentence: String,
}

impl AnalysisRequest {
  /// JSON ボディからデコードする
  ///
  /// # Errors
  /// 不正な JSON、型の不一致、オブジェクト以外の値、空ボディの場合にエラーを返す
  pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
    serde_json::from_slice(body)
  }
}

impl<'de> Deserialize<'de> for AnalysisRequest {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_option(RequestVisitor)
  }
}

struct RequestVisitor;

impl<'de> Visitor<'de> for RequestVisitor {
  type Value = AnalysisRequest;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a JSON object with Token and Sentence")
  }

  fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(AnalysisRequest::default())
  }

  fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
    Ok(AnalysisRequest::default())
  }

  fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(self)
  }

  fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut request = AnalysisRequest::default();

    while let Some(key) = map.next_key::<String>()? {
      let slot = if key.eq_ignore_ascii_case("token") {
        &mut request.token
      } else if key.eq_ignore_ascii_case("sentence") {
        &mut request.sentence
      } else {
        map.next_value::<IgnoredAny>()?;
        continue;
      };

      if let Some(value) = map.next_value::<Option<String>>()? {
        *slot = value;
      }
    }

    Ok(request)
  }
}
