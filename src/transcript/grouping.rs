//! Модуль группировки сегментов транскрипта
//!
//! Этот модуль разбивает упорядоченную последовательность сегментов на
//! непрерывные группы под бюджет длительности. Группы пересчитываются
//! заново при каждом изменении входных данных и никогда не изменяются
//! на месте.

use serde::{Deserialize, Serialize};

use super::Segment;

/// Группа последовательных сегментов транскрипта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Порядковый номер группы (с нуля)
    pub group_number: usize,
    /// Время начала первого сегмента группы, в секундах
    pub start: f64,
    /// Текст сегментов группы, соединённый пробелами в порядке следования
    pub text: String,
}

/// Разбивает сегменты на группы под бюджет длительности
///
/// При `max_duration == 0.0` каждый сегмент становится отдельной группой,
/// без накопления длительности. Иначе сегменты добавляются в текущую
/// группу, пока её суммарная длительность не превысила бы бюджет; проверка
/// срабатывает только для непустой группы, поэтому сегмент, который сам
/// длиннее бюджета, не разрезается и образует собственную группу из одного
/// элемента. Сегмент с нулевой длительностью добавляет 0 к накопителю и
/// сам по себе группу не закрывает.
pub fn group(segments: &[Segment], max_duration: f64) -> Vec<Group> {
    if segments.is_empty() {
        return Vec::new();
    }

    // Отдельная ветка для нулевого бюджета
    if max_duration == 0.0 {
        return segments
            .iter()
            .enumerate()
            .map(|(index, segment)| Group {
                group_number: index,
                start: segment.start,
                text: segment.text.clone(),
            })
            .collect();
    }

    let mut groups: Vec<Group> = Vec::new();
    let mut current_duration = 0.0_f64;

    for segment in segments {
        // Закрыть текущую группу до размещения сегмента, если она непуста
        // и сегмент переполнил бы бюджет
        let close_current = current_duration != 0.0
            && current_duration + segment.duration > max_duration;
        if close_current {
            current_duration = 0.0;
        }

        if close_current || groups.is_empty() {
            groups.push(Group {
                group_number: groups.len(),
                start: segment.start,
                text: segment.text.clone(),
            });
        } else if let Some(current) = groups.last_mut() {
            current.text.push(' ');
            current.text.push_str(&segment.text);
        }

        current_duration += segment.duration;
    }

    groups
}
