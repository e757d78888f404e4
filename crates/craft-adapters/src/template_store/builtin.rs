//! Built-in templates compiled into the binary.
//!
//! These target a plain JavaScript backend with `models/`, `controllers/`
//! and `services/` directories. A custom collection on disk (see
//! [`DirectoryTemplateStore`](crate::template_store::DirectoryTemplateStore))
//! takes precedence when configured.

use craft_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::CoreResult,
};

const MODEL: &str = r#"class {{NAME}} {
  constructor(data = {}) {
    Object.assign(this, data);
  }
}

module.exports = {{NAME}};
"#;

const MODEL_RESOURCE: &str = r#"const db = require('../db');

class {{NAME}} {
  constructor(data = {}) {
    Object.assign(this, data);
  }

  static async findAll() {
    return db('{{TABLE}}').select('*');
  }

  static async findById(id) {
    return db('{{TABLE}}').where({ id }).first();
  }

  static async create(attributes) {
    const [row] = await db('{{TABLE}}').insert(attributes).returning('*');
    return new {{NAME}}(row);
  }

  static async update(id, attributes) {
    const [row] = await db('{{TABLE}}')
      .where({ id })
      .update(attributes)
      .returning('*');
    return row ? new {{NAME}}(row) : null;
  }

  static async remove(id) {
    return db('{{TABLE}}').where({ id }).del();
  }
}

module.exports = {{NAME}};
"#;

const CONTROLLER: &str = r#"class {{NAME}} {
  async index(req, res) {
    res.status(501).json({ error: 'not implemented' });
  }
}

module.exports = new {{NAME}}();
"#;

const CONTROLLER_RESOURCE: &str = r#"const {{MODEL_NAME}} = require('../models/{{MODEL_NAME}}');

class {{NAME}} {
  async index(req, res, next) {
    try {
      const {{PLURAL}} = await {{MODEL_NAME}}.findAll();
      res.json({{PLURAL}});
    } catch (err) {
      next(err);
    }
  }

  async show(req, res, next) {
    try {
      const {{SINGULAR}} = await {{MODEL_NAME}}.findById(req.params.id);
      if (!{{SINGULAR}}) {
        return res.status(404).json({ error: '{{SINGULAR}} not found' });
      }
      res.json({{SINGULAR}});
    } catch (err) {
      next(err);
    }
  }

  async create(req, res, next) {
    try {
      const {{SINGULAR}} = await {{MODEL_NAME}}.create(req.body);
      res.status(201).json({{SINGULAR}});
    } catch (err) {
      next(err);
    }
  }

  async update(req, res, next) {
    try {
      const {{SINGULAR}} = await {{MODEL_NAME}}.update(req.params.id, req.body);
      if (!{{SINGULAR}}) {
        return res.status(404).json({ error: '{{SINGULAR}} not found' });
      }
      res.json({{SINGULAR}});
    } catch (err) {
      next(err);
    }
  }

  async destroy(req, res, next) {
    try {
      await {{MODEL_NAME}}.remove(req.params.id);
      res.status(204).end();
    } catch (err) {
      next(err);
    }
  }
}

module.exports = new {{NAME}}();
"#;

const SERVICE: &str = r#"class {{NAME}} {
}

module.exports = new {{NAME}}();
"#;

const SERVICE_RESOURCE: &str = r#"const {{MODEL_NAME}} = require('../models/{{MODEL_NAME}}');

class {{NAME}} {
  async list() {
    return {{MODEL_NAME}}.findAll();
  }

  async get(id) {
    return {{MODEL_NAME}}.findById(id);
  }

  async create(attributes) {
    return {{MODEL_NAME}}.create(attributes);
  }

  async update(id, attributes) {
    return {{MODEL_NAME}}.update(id, attributes);
  }

  async remove(id) {
    return {{MODEL_NAME}}.remove(id);
  }
}

module.exports = new {{NAME}}();
"#;

/// Template store backed by the compiled-in collection above.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Logical names this store knows.
    pub fn names() -> &'static [&'static str] {
        &[
            "model",
            "model_resource",
            "controller",
            "controller_resource",
            "service",
            "service_resource",
        ]
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn load(&self, name: &str) -> CoreResult<String> {
        let body = match name {
            "model" => MODEL,
            "model_resource" => MODEL_RESOURCE,
            "controller" => CONTROLLER,
            "controller_resource" => CONTROLLER_RESOURCE,
            "service" => SERVICE,
            "service_resource" => SERVICE_RESOURCE,
            _ => {
                return Err(ApplicationError::MissingTemplate {
                    name: name.to_string(),
                }
                .into());
            }
        };
        Ok(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::error::CoreError;

    #[test]
    fn every_advertised_name_loads() {
        let store = BuiltinTemplateStore::new();
        for name in BuiltinTemplateStore::names() {
            assert!(store.load(name).is_ok(), "template {name} missing");
        }
    }

    #[test]
    fn unknown_name_is_missing_template() {
        let store = BuiltinTemplateStore::new();
        let err = store.load("migration").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::MissingTemplate { .. })
        ));
    }

    #[test]
    fn resource_templates_reference_the_model_placeholder() {
        let store = BuiltinTemplateStore::new();
        for name in ["controller_resource", "service_resource"] {
            let body = store.load(name).unwrap();
            assert!(body.contains("{{MODEL_NAME}}"), "template {name}");
        }
        assert!(store.load("model_resource").unwrap().contains("{{TABLE}}"));
    }
}
