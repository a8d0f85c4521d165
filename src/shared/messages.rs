//! User-facing reply texts. `{day}`, `{item}`, `{note}`, `{n}` are filled by the composers.

pub const UNRECOGNIZED: &str = "ごめんなさい、知らない言葉が含まれているようです🤔\n「今日」「月曜 詳細」のように話しかけてみてくださいね。";

pub const NO_TARGET: &str =
    "曜日が指定されていません。例えば「明日」「月曜 詳細」のように聞いてくださいね。";

pub const SCHEDULE_EMPTY: &str = "スケジュールが登録されていません。";

pub const WEEK_ALT_TEXT: &str = "ゴミ出しスケジュール一覧";

pub const HELP_ALT_TEXT: &str = "ボットの使い方";

/// Help body, one line per entry.
pub const HELP_LINES: &[&str] = &[
    "曜日を送ると、その日のゴミを答えます。",
    "・曜日: 「月」「月曜」「月曜日」など",
    "・今日 / 明日: 「今日」「きょう」「明日」「あした」",
    "・注意事項も見る: 「月曜 詳細」",
    "・1週間分: 「全部」「一覧」",
    "・登録: 「登録 月曜 燃えるゴミ 水を切る」",
    "・変更: 「変更 火曜 プラ なし」",
    "・リマインダー: 「通知 夜 21:00」「通知 朝 7:00」「停止 夜」「リマインダー」",
];

pub const LABEL_ITEM: &str = "品目";
pub const LABEL_NOTE: &str = "注意事項";

pub fn day_line(day: &str, item: &str) -> String {
    format!("【{day}】のゴミは「{item}」です。")
}

pub fn day_detail(day: &str, item: &str, note: &str) -> String {
    format!("【{day}】\n{LABEL_ITEM}：{item}\n\n{LABEL_NOTE}：\n{note}")
}

pub fn day_not_found(day: &str) -> String {
    format!("【{day}】のゴミ情報は見つかりませんでした。")
}

pub fn registered(day: &str) -> String {
    format!("✅【{day}】の予定を登録しました。")
}

pub fn updated(day: &str) -> String {
    format!("✅【{day}】の予定を更新しました。")
}

pub fn command_usage(keyword: &str) -> String {
    format!("⚠️ 「{keyword} 曜日 品目 [注意事項]」の形で送ってください。\n例: 「{keyword} 月曜 燃えるゴミ 水を切る」")
}

pub fn command_bad_day(word: &str) -> String {
    format!("⚠️ 「{word}」は曜日として分かりませんでした。「月曜」「明日」のように指定してください。")
}

pub fn item_too_long(n: usize) -> String {
    format!("⚠️ 品目は{n}文字以内で入力してください。")
}

pub fn note_too_long(n: usize) -> String {
    format!("⚠️ 注意事項は{n}文字以内で入力してください。")
}

pub const REMINDER_NIGHT_TITLE: &str = "夜のリマインダー🔔";
pub const REMINDER_MORNING_TITLE: &str = "朝のリマインダー☀️";
pub const REMINDER_OFF: &str = "未設定";

/// "明日のごみ (月曜)" / "今日のごみ (月曜)".
pub fn reminder_day(relative: &str, day: &str) -> String {
    format!("{relative}のごみ ({day})")
}

pub fn reminder_alt(relative: &str, item: &str) -> String {
    format!("【リマインダー】{relative}のごみは「{item}」です。")
}

pub fn reminder_text(title: &str, day_line: &str, item: &str, note: &str) -> String {
    format!("{title}\n{day_line}\n{LABEL_ITEM}：{item}\n\n{LABEL_NOTE}：\n{note}")
}

pub fn reminder_set(label: &str, time: &str) -> String {
    format!("✅ 承知いたしました。【{label}のリマインダー】を毎日 {time} に送信します。")
}

pub fn reminder_stopped(label: &str) -> String {
    format!("✅【{label}のリマインダー】を停止しました。")
}

pub fn reminder_settings(night: &str, morning: &str) -> String {
    format!(
        "🔔 リマインダー設定\n夜（前日に翌日の予定）: {night}\n朝（当日の予定）: {morning}\n\n設定: 「通知 夜 21:00」 停止: 「停止 夜」"
    )
}

pub fn reminder_usage(form: &str) -> String {
    format!("⚠️ 「{form}」の形で送ってください。")
}

pub fn reminder_bad_time(text: &str) -> String {
    format!("⚠️ 「{text}」は時刻として分かりませんでした。「21:00」のように指定してください。")
}
