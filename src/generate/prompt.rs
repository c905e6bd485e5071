// src/generate/prompt.rs
//! Prompt construction for the drafting call. The template is fixed; the
//! candidate list is embedded as a pretty-printed JSON array.

use anyhow::{Context, Result};

use crate::ingest::types::NewsItem;

const NEWS_PLACEHOLDER: &str = "{news_json}";

/// Full instruction template: persona, platform rules, output shape. The
/// audience and drafts are Japanese, so the template stays Japanese too.
pub const PROMPT_TEMPLATE: &str = r#"あなたは「AI×採用」領域の専門家として、Xでインプレッションの高い投稿を作成するプロです。

以下のニュースから最もバズりそうなものを1つ選び、投稿を3パターン作成してください。

## ニュース一覧
{news_json}

## Xアルゴリズムの重要ポイント（2025年最新）
- 短文や一文のコンテンツはプッシュされない
- 高労力のコンテンツを優先
→ 「量より質」「短文より長文」が正解

## 投稿作成ルール
1. 文字数: 500〜1000文字程度
2. 構成: 冒頭フック → 本文・考察 → 読者へのアクション → 元ネタURL
3. 具体的な数字を入れる（ソースにない数字は使わない）
4. 独自の視点を加える（なぜ重要か、影響予測、取るべきアクション）
5. 適度に改行、箇条書きも可
6. ハッシュタグは最大2つ
7. 「私」「弊社」は使わない

## 投稿者ペルソナ
- AI×採用領域の専門家
- 転職者向けAIエージェントサービスを運営
- 1,500件以上のキャリア面談実績

## 出力形式（JSON）
{
  "selected_news": "ニュースタイトル",
  "selected_news_url": "URL",
  "reason": "選んだ理由（50字以内）",
  "posts": [
    {"text": "投稿本文（末尾にURL含む）", "format_type": "フォーマット名", "hook": "冒頭フック"}
  ]
}
"#;

/// Embed the candidate list into the template. Indentation is two spaces and
/// non-ASCII text is kept as-is, so the model sees readable Japanese.
pub fn build_prompt(candidates: &[NewsItem]) -> Result<String> {
    let news_json =
        serde_json::to_string_pretty(candidates).context("serializing candidate list")?;
    Ok(PROMPT_TEMPLATE.replace(NEWS_PLACEHOLDER, &news_json))
}
