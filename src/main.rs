//! Kotoba - 표준 입력 JSON 한 줄당 요청 하나를 검사해 결과 JSON 한 줄을 출력
//!
//! ```text
//! {"module": "verbs", "word": {"hiragana": "たべる", "english": "to eat"}, "answer": "taberu"}
//! {"module": "colors", "word": {...}, "inputs": {"hiragana": "あか", "english": "red"}}
//! {"module": "verbs", "forms": {"polite": {...}}, "conjugations": {"polite": "tabemasu"}}
//! {"convert": "kitte", "field": "katakana"}
//! ```

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};

use kotoba::activity::{
    ActivityValidator, ConjugationForm, ModuleValidatorFactory, ValidationSummary, WordItem,
};
use kotoba::config::{load_config, UserSettings};
use kotoba::core::converter::convert_input_for_field;
use kotoba::{AnswerType, ConversionResult, ValidationResult};

/// 요청 한 줄
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Request {
    module: String,
    word: Option<WordItem>,
    /// 답안 하나 (모든 칸과 비교)
    answer: Option<String>,
    /// 칸별 입력
    inputs: Option<BTreeMap<AnswerType, String>>,
    /// 활용형 이름 -> 활용형
    forms: Option<BTreeMap<String, ConjugationForm>>,
    /// 활용형 이름 -> 답안
    conjugations: Option<BTreeMap<String, String>>,
    /// 변환만 수행
    convert: Option<String>,
    field: Option<AnswerType>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Response {
    Result(ValidationResult),
    Summary(ValidationSummary),
    Conversion(ConversionResult),
    Error { error: String },
}

fn handle(request: Request, modules: &ModuleValidatorFactory, settings: &UserSettings) -> Response {
    if let Some(text) = request.convert {
        let field = request.field.unwrap_or(AnswerType::Hiragana);
        return Response::Conversion(convert_input_for_field(&text, field, settings));
    }

    if let (Some(forms), Some(answers)) = (&request.forms, &request.conjugations) {
        let validator = modules.conjugation_validator();
        return Response::Summary(validator.conjugation_validation_summary(answers, forms));
    }

    let answers = request.word.map(|w| w.answers).unwrap_or_default();
    let validator = modules.create_module_validator(&request.module);

    if let Some(inputs) = request.inputs {
        // 꺼진 칸의 입력은 무시
        let enabled = validator.enabled_input_types(settings);
        let inputs: BTreeMap<AnswerType, String> = inputs
            .into_iter()
            .filter(|(t, _)| enabled.contains(t))
            .collect();
        return Response::Result(validator.validate_all_inputs(&inputs, &answers));
    }

    match request.answer {
        Some(answer) => Response::Result(validator.validate_answer(&answer, &answers)),
        None => Response::Error {
            error: "request needs one of: answer, inputs, conjugations, convert".to_string(),
        },
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();
    let modules = ModuleValidatorFactory::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => handle(request, &modules, &config.settings),
            Err(e) => {
                log::warn!("잘못된 요청: {}", e);
                Response::Error {
                    error: e.to_string(),
                }
            }
        };

        let json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                log::error!("결과 직렬화 실패: {}", e);
                continue;
            }
        };
        if writeln!(out, "{}", json).is_err() {
            break;
        }
    }
}
