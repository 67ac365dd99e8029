use unicode_normalizing::PropertyTables;
use unicode_normalizing::PropertyTablesBuilder;

use crate::composition_exclusions;
use crate::properties::Codepoint;
use crate::properties::PropertiesError;
use crate::unicode;

const UNICODE_DATA: &str = include_str!("./../data/ucd/UnicodeData.txt");
const COMPOSITION_EXCLUSIONS: &str = include_str!("./../data/ucd/CompositionExclusions.txt");

/// таблицы свойств из содержимого UnicodeData.txt и CompositionExclusions.txt
pub fn properties(unicode_data: &str, exclusions: &str) -> Result<PropertyTables, PropertiesError>
{
    let codepoints = unicode::parse(unicode_data)?;
    let exclusions = composition_exclusions::parse(exclusions)?;

    from_codepoints(&codepoints, &exclusions)
}

/// таблицы свойств из выдержки UCD, входящей в крейт
pub fn bundled() -> Result<PropertyTables, PropertiesError>
{
    properties(UNICODE_DATA, COMPOSITION_EXCLUSIONS)
}

/// таблицы свойств из уже разобранных кодпоинтов и списка исключений
pub fn from_codepoints(
    codepoints: &[Codepoint],
    exclusions: &[u32],
) -> Result<PropertyTables, PropertiesError>
{
    let mut builder = PropertyTablesBuilder::new();

    for codepoint in codepoints {
        builder.combining_class(codepoint.code, codepoint.ccc.into())?;

        if !codepoint.decomposition.is_empty() {
            builder.decomposition(
                codepoint.code,
                &codepoint.decomposition,
                codepoint.is_compatibility(),
            )?;
        }
    }

    for &code in exclusions {
        builder.exclusion(code)?;
    }

    log::trace!("кодпоинтов - {}, исключений - {}", codepoints.len(), exclusions.len());

    Ok(builder.build()?)
}
