//! Config-schema serializer.
//!
//! Renders the assembled document as the line-oriented declarative text
//! consumed by the configuration editor: `[section:subsection=key]` block
//! headers followed by `key=value` property lines. Output must be
//! byte-identical across runs over the same document, so every derived
//! collection is rendered in a fixed order.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MetaError, Result};
use crate::model::{DimensionKind, Field, Group, MetadataDocument, Section};

/// Column width for the per-field description paragraph.
const DESCRIPTION_WIDTH: usize = 100;

/// Greedy word wrap: lines never exceed `width` unless a single word does.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Sorted union of every level marker named as a top or bottom argument by
/// any field in the group.
fn model_levels_for_group(group: &Group) -> BTreeSet<&str> {
    let mut levels = BTreeSet::new();
    for field in group.fields.values() {
        if let Some(vertical) = &field.vertical_dimension {
            if let Some(top) = &vertical.top_arg {
                levels.insert(top.as_str());
            }
            if let Some(bottom) = &vertical.bottom_arg {
                levels.insert(bottom.as_str());
            }
        }
    }
    levels
}

fn push_group_blocks(out: &mut String, section: &Section, group: &Group) {
    out.push_str(&format!(
        "\n[field_config:{}:{}]\ntitle={}\n",
        section.name, group.name, group.title
    ));

    out.push_str(&format!(
        "\n[field_config:{}:{}=model_levels_for_group]\n\
         title=Model Levels used by this group\n\
         description=Vertical dimensions must define these levels to be valid\n\
         values=\n",
        section.name, group.name
    ));
    for level in model_levels_for_group(group) {
        out.push_str(&format!("            {level}\n"));
    }
    out.push_str("sort-key=01\ncompulsory=true\n");

    out.push_str(&format!(
        "\n[field_config:{}:{}=vertical_dimension_for_group]\n\
         title=Vertical dimension used by this group\n\
         description=If you have edited the vertical dimensions please restart the editor\n\
         \x20           to pick up the changes to the application configuration\n\
         widget[rose-config-edit]=vertical_dimension_choice.VertDimWidget\n\
         sort-key=02\ncompulsory=true\n",
        section.name, group.name
    ));

    for field in group.fields.values() {
        push_field_blocks(out, section, group, field);
    }
}

fn push_field_blocks(out: &mut String, section: &Section, group: &Group, field: &Field) {
    let id = field.unique_id.as_deref().unwrap_or_default();
    let item_title = field.item_title.as_deref().unwrap_or_default();

    out.push_str(&format!(
        "\n[field_config:{}:{}={id}]\ntype=boolean\ntitle=Enable {item_title}\n",
        section.name, group.name
    ));
    out.push_str(&format!(
        "trigger=field_config:{}:{}={id}{}\n",
        section.name,
        group.name,
        field.trigger.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!(
        "help=Unit of Measure: {}\n\
         \x20   =Function Space: {}\n\
         \x20   =Data type: {}\n\
         \x20   =Time step: {}\n\
         \x20   =Interpolation: {}\n",
        field.units.as_deref().unwrap_or_default(),
        field.function_space.as_deref().unwrap_or_default(),
        field.data_type.as_deref().unwrap_or_default(),
        field.time_step.as_deref().unwrap_or_default(),
        field.recommended_interpolation.as_deref().unwrap_or_default(),
    ));

    if let Some(vertical) = &field.vertical_dimension {
        out.push_str("    =vertical_dimension:\n");
        if let Some(top) = &vertical.top_arg {
            out.push_str(&format!("       =top_level: {top}\n"));
        }
        if let Some(bottom) = &vertical.bottom_arg {
            out.push_str(&format!("       =bottom_level: {bottom}\n"));
        }
        if let Some(levels) = &vertical.level_definition {
            out.push_str(&format!("       =level_definition: {levels:?}\n"));
        }
        out.push_str(&format!("       =units: {}\n", vertical.units));
        out.push_str(&format!("       =positive: {}\n", vertical.positive));
        out.push_str(&format!("       =standard_name: {}\n", vertical.standard_name));
    }

    if !field.synonyms.is_empty() {
        out.push_str("    =Synonyms:\n");
        for (standard, codes) in &field.synonyms {
            for code in codes {
                out.push_str(&format!("    =    {}: {code}\n", standard.label()));
            }
        }
    }

    if !field.non_spatial_dimension.is_empty() {
        out.push_str("    =Required non-spatial dimensions:\n");
        for dimension in field.non_spatial_dimension.values() {
            out.push_str(&format!("    =    {}\n", dimension.name));
        }
    }

    let wrapped = wrap(field.description.as_deref().unwrap_or_default(), DESCRIPTION_WIDTH);
    out.push_str(&format!(
        "description={}\n\
         \x20          =For more information on {item_title}, see the help text\n",
        wrapped.join("\n           ")
    ));

    out.push_str(&format!(
        "\n[field_config:{}:{}={id}__checksum]\n\
         type=boolean\ntitle=Enable Checksum for {item_title}\n",
        section.name, group.name
    ));
}

/// The global block that makes every field id selectable as output-stream
/// content.
fn push_output_stream(out: &mut String, document: &MetadataDocument) {
    let mut ids = Vec::new();
    let mut titles = Vec::new();
    for section in document.sections.values() {
        for group in section.groups.values() {
            for field in group.fields.values() {
                ids.push(field.unique_id.clone().unwrap_or_default());
                titles.push(format!(
                    "{}: {}: {}",
                    section.title,
                    group.title,
                    field.item_title.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    out.push_str(&format!(
        "\n[output_stream]\n\
         duplicate=true\n\
         macro=add_section.AddField, add_section.AddStream\n\
         title=Output Streams\n\
         \n\
         [output_stream=name]\n\
         type=character\n\
         \n\
         [output_stream=timestep]\n\
         type=character\n\
         \n\
         [output_stream:field]\n\
         duplicate=true\n\
         macro=add_section.AddField\n\
         title=Fields\n\
         \n\
         [output_stream:field=id]\n\
         values={}\n\
         value-titles=\"{}\"\n\
         \n\
         [output_stream:field=temporal]\n\
         values=instant,average,accumulate,minimum,maximum,once\n",
        ids.join(", "),
        titles.join("\", \"")
    ));
}

/// The static vertical-dimension blocks plus one range-checked block per
/// standard level marker.
fn push_vertical_blocks(out: &mut String, levels: &[String]) {
    out.push_str(
        "\n[vertical_dimension]\n\
         duplicate=true\n\
         title=Vertical Dimension\n\
         \n\
         [vertical_dimension=name]\n\
         title=Name\n\
         description=Name of the vertical dimension\n\
         help=The name used to identify this vertical dimension when associating a field\n\
         \x20    with it in the configuration editor\n\
         type=character\n\
         compulsory=true\n\
         fail-if=len(this) == 0 # Name must be specified\n\
         sort-key=01\n\
         \n\
         [vertical_dimension=positive]\n\
         title=Positive\n\
         description=The positive direction\n\
         help=The positive direction of the vertical axis, either up or down\n\
         values=up, down\n\
         compulsory=true\n\
         sort-key=02\n\
         \n\
         [vertical_dimension=units]\n\
         title=Units\n\
         description=Unit of measure\n\
         help=The unit of measure for this vertical axis is restricted to be in metres\n\
         values=m\n\
         compulsory=true\n\
         sort-key=03\n\
         \n\
         [vertical_dimension=level_definition]\n\
         title=Level boundaries\n\
         description=Boundaries of levels in ascending order\n\
         help=Positive numbers defining the edges of each level in the vertical\n\
         \x20    dimension. The boundaries should be entered in ascending order\n\
         length=:\n\
         type=real\n\
         macro=level_definition.Validator, level_definition.Transformer\n\
         range=0:\n\
         fail-if=len(this)<2 # There must be at least two level boundaries\n\
         compulsory=true\n\
         sort-key=04\n",
    );

    for (offset, level) in levels.iter().enumerate() {
        out.push_str(&format!(
            "\n[vertical_dimension={level}]\n\
             title={}\n\
             description=A Model Level\n\
             type=integer\n\
             range=0:\n\
             # Layer out of range\n\
             fail-if=this > len(vertical_dimension=level_definition)-1;\n\
             sort-key=model-levels-{}\n",
            level.replace('_', " "),
            1001 + offset
        ));
    }
}

/// One block per non-spatial dimension still needing configuration, wired
/// to every field that consumes it. Dimensions carrying a literal value
/// list are fully defined in source and are skipped.
fn push_non_spatial_blocks(out: &mut String, document: &MetadataDocument) {
    out.push_str("\n[non_spatial_dimensions]\ntitle=Non-Spatial Dimensions\n");

    for dimension in document.non_spatial_dimensions.values() {
        if dimension.has_definition() {
            continue;
        }

        let value_type = match dimension.kind {
            Some(DimensionKind::AxisDefinition) => "real",
            Some(DimensionKind::LabelDefinition) | None => "character",
        };
        out.push_str(&format!(
            "\n[non_spatial_dimensions={}]\n\
             title={}\n\
             description=Level definition for {}\n\
             type={value_type}\n\
             length=:\n\
             trigger=",
            dimension.name.to_lowercase().replace(' ', "_"),
            dimension.name,
            dimension.name
        ));
        for consumer in &dimension.fields {
            out.push_str(&format!(
                "\n       =field_config:{}:{}={}: len(this) > 0 ;",
                consumer.section, consumer.group, consumer.field_id
            ));
        }

        out.push_str(&format!(
            "\nhelp={}",
            dimension.help.as_deref().unwrap_or_default()
        ));
        if let Some(unit) = &dimension.unit {
            out.push_str(&format!("\n    =Units: {unit}"));
        }
        out.push_str("\n    =Necessary for:");
        for consumer in &dimension.fields {
            out.push_str(&format!("\n    =    {}", consumer.field_id));
        }
        out.push('\n');
    }
}

/// Render the full config schema as a string.
pub fn create_config_schema(document: &MetadataDocument) -> String {
    let mut out = String::new();
    out.push_str("[field_config]\ntitle=Field Configuration\n");

    for section in document.sections.values() {
        out.push_str(&format!(
            "\n[field_config:{}]\ntitle={}\n",
            section.name, section.title
        ));
        for group in section.groups.values() {
            push_group_blocks(&mut out, section, group);
        }
    }

    push_output_stream(&mut out, document);
    push_vertical_blocks(&mut out, &document.standard_level_markers);
    push_non_spatial_blocks(&mut out, document);
    out
}

/// Write the schema to `<directory>/meta/<file_name>.conf` and return the
/// path written.
pub fn write_config_schema(
    document: &MetadataDocument,
    directory: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let meta_dir = directory.join("meta");
    fs::create_dir_all(&meta_dir).map_err(|source| MetaError::Io {
        path: meta_dir.clone(),
        source,
    })?;
    let path = meta_dir.join(format!("{file_name}.conf"));
    info!("Creating {}", path.display());
    fs::write(&path, create_config_schema(document)).map_err(|source| MetaError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
