//! слоги хангыль не хранятся в таблицах - их декомпозиция и композиция вычисляются
//! алгоритмически (Unicode, глава 3.12 "Conjoining Jamo Behavior")

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A8;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше - с учетом слога без завершающей согласной)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// является ли кодпоинт слогом хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// дописать в буфер декомпозицию слога хангыль (L, V и, возможно, T)
/// если кодпоинт не является слогом - возвращаем false, буфер не меняется
#[inline]
pub fn decompose_hangul(code: u32, buffer: &mut Vec<u32>) -> bool
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    if s >= HANGUL_S_COUNT {
        return false;
    }

    let l = s / HANGUL_N_COUNT;
    let v = (s % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = s % HANGUL_T_COUNT;

    buffer.push(HANGUL_L_BASE + l);
    buffer.push(HANGUL_V_BASE + v);

    if t != 0 {
        buffer.push(HANGUL_T_BASE + t - 1);
    }

    true
}

/// композиция чамо хангыль: L + V -> LV, LV + T -> LVT
#[inline]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    // кейс L, V

    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT),
            false => None,
        };
    }

    // кейс LV, T

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    if lv < HANGUL_S_COUNT && lv % HANGUL_T_COUNT == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        if t < HANGUL_T_COUNT - 1 {
            return Some(first + t + 1);
        }
    }

    None
}
