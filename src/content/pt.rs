use super::*;

pub static STRINGS: Strings = Strings {
    sidebar_title: "Navegação",
    sidebar_prompt: "Ir para:",
    page_labels: [
        "📌 Visão Geral",
        "☁️ Ambiente Cloud",
        "🖥️ Ambiente Local",
        "🏗️ Arquitetura de Dados",
    ],
    overview: OverviewStrings {
        title: "📌 Visão Geral",
        intro: r#"Este projeto implementa um pipeline completo para simulação e análise de logins de usuários em um jogo. Para testar sua execução, siga as etapas de configuração dos ambientes local e cloud descritas nas próximas seções.

Após concluir a configuração, a DAG estará pronta para ser executada. Em um cenário de produção, as DAGs devem ser agendadas para execução diária, garantindo que os dados estejam sempre atualizados.

A execução do pipeline começa manualmente pela DAG `dag_data_creation`. A DAG `dag_data_transformation` foi desenvolvida para iniciar automaticamente após o término da primeira.

O projeto foi estruturado para garantir o máximo de automação e tolerância a falhas. Para isso, foram implementadas notificações no Slack tanto para casos de sucesso quanto de falha, enviadas para um canal específico de logs. Essa abordagem oferece visibilidade operacional em ambientes com múltiplas DAGs, permitindo respostas rápidas e eficazes a falhas.

Prévia das notificações:"#,
        slack_caption: "Notificações no Slack - Airflow",
        objective: r#"### 🎯 Objetivo
O principal objetivo do projeto foi disponibilizar tabelas analíticas que possam ser usadas por analistas para gerar insights relevantes que apoiem a tomada de decisão.

A arquitetura foi pensada para ser escalável, considerando o crescimento contínuo da base de usuários e do volume de dados. Por isso, foram escolhidas tecnologias como PySpark e SparkSQL, que permitem o processamento eficiente de grandes volumes de dados."#,
        login_aggregate: r#"### 🧾 Tabelas Finais Geradas

- **`login_agg_date`**
  Tabela agregada por data. Como os registros de login originais são baseados em timestamp, foi feita uma agregação diária, contando o número de logins de cada usuário por dia. Também inclui informações sobre continente, país e sistema operacional utilizado."#,
        first_time_login: r#"- **`first_time_login`**
  Esta tabela apresenta uma agregação por `user_id`, contendo o total de logins realizados por cada usuário, além da data e hora do primeiro login registrado. Também inclui informações de continente, país e sistema operacional."#,
        reminder: "Só para reforçar: em um ambiente de produção, é essencial que as DAGs rodem diariamente para garantir a atualização contínua das tabelas analíticas.",
        folder_heading: "📁 Estrutura de Pastas do Projeto",
        ready_heading: "✅ Pronto para começar?",
        button: "☁️ Configurar Ambiente Cloud",
    },
    cloud: CloudStrings {
        title: "☁️ Configuração: Ambiente Cloud (AWS)",
        body: r#"## ✍️ Introdução

Este documento descreve os passos necessários para configurar e executar o projeto na AWS. O processo envolve três aspectos principais: estabelecer uma conexão local com o Redshift Serverless, criar os buckets no S3 e definir suas respectivas políticas e configurações de segurança para permitir que o Redshift acesse esses buckets.

Esses passos foram adotados em função da decisão de desenvolver o código com PySpark. Inicialmente, usei uma conexão direta com o Redshift por meio do driver JDBC disponibilizado pela AWS. Embora essa abordagem permitisse usar apenas o Redshift, sem depender de outros serviços da AWS, ela tem uma limitação importante. O Redshift Serverless é cobrado por consulta e tempo de execução, e o uso de JDBC faz com que o PySpark envie os dados linha a linha. Essa prática, além de extremamente ineficiente em desempenho, gera custos bem maiores por causa do tempo de execução prolongado necessário para salvar os dados.

Por isso, optei por uma abordagem mais eficiente: salvar os dados no S3 em formato Parquet, um formato leve e otimizado que permite ao PySpark usar processamento distribuído. Em seguida, com o comando `COPY`, os dados são transferidos para o Redshift. Essa estratégia traz duas vantagens principais: o Redshift é estruturado nativamente para executar o `COPY` com processamento paralelo, o que garante um desempenho muito melhor, e, por ser mais rápido, reduz bastante o tempo ativo do Redshift, contribuindo diretamente para a economia de custos.

Portanto, os passos descritos abaixo têm o objetivo de garantir mais eficiência, desempenho e economia na execução do projeto.

---

## ✅ Configuração Passo a Passo

### 1. Criar o Workgroup e o Namespace no Redshift Serverless

- Acesse o console do Amazon Redshift → Redshift Serverless.
- Crie um novo **Workgroup** e um **Namespace**.
- Associe uma **IAM Role** com permissão de acesso ao S3 (detalhado no passo 4).
- Acesse Redshift → Workgroup → Edit settings.
- Habilite a opção **Publicly accessible**.

### 2. Criar o Bucket no Amazon S3

- Acesse o console do Amazon S3 e crie um bucket (ex.: `final-data-game`).
- Dentro do bucket, crie duas pastas (ex.: `login-agg-date` e `first-time-login`).

### 3. Configurar o Security Group

- Acesse **EC2 → Security Groups**.
- Localize o security group associado ao seu Workgroup do Redshift.
- Adicione uma **regra de entrada**:
    - Type: PostgreSQL
    - Protocol: TCP
    - Port: 5439
    - Source: My IP

### 4. Criar e Configurar a IAM Role

- Acesse **IAM → Roles → Create Role**.
- Tipo de entidade confiável: **AWS Service**
- Serviço: **Redshift**
- Caso de uso: **Redshift - Customizable**
- Anexe a política `AmazonS3ReadOnlyAccess`
- Conclua a criação da role e copie o ARN.
- Guarde o ARN, pois ele será usado na configuração do ambiente local.

### 5. Configurar as Permissões no Bucket do S3

- Acesse o bucket no S3 → aba Permissions → Bucket Policy.
- Adicione a política abaixo (substitua os valores conforme necessário):

```json
{
  "Version": "2012-10-17",
  "Statement": [
    {
      "Sid": "AllowRedshiftServerlessReadAccess",
      "Effect": "Allow",
      "Principal": {
        "Service": "redshift.amazonaws.com"
      },
      "Action": [
        "s3:GetObject",
        "s3:ListBucket",
        "s3:PutObject",
        "s3:PutObjectAcl"
      ],
      "Resource": [
        "arn:aws:s3:::final-data-game",
        "arn:aws:s3:::final-data-game/*"
      ],
      "Condition": {
        "StringEquals": {
          "aws:SourceAccount": "YOUR_ACCOUNT_ID"
        },
        "ArnLike": {
          "aws:SourceArn": "YOUR_REDSHIFT_WORKGROUP_ARN"
        }
      }
    }
  ]
}
```"#,
        ready_heading: "🧩 Pronto para configurar o ambiente local?",
        button: "🖥️ Ir para o Ambiente Local",
    },
    local: LocalStrings {
        title: "🖥️ Configuração: Ambiente Local",
        body: r#"### 📄 1. Clonar o Repositório

```git
git clone https://github.com/IgorCanelo/ETL.git
```

### 🔐 2. Configuração do `.env`

Crie um arquivo chamado `.env` na raiz do projeto e preencha com as credenciais necessárias para os testes locais.

```dotenv
AWS_ACCESS_KEY_ID=your_access_key_aws
AWS_SECRET_ACCESS_KEY=your_secret_key_aws
SAVE_TABLE_1_S3=s3a://final-data-game/first-time-login/
SAVE_TABLE_2_S3=s3a://final-data-game/login-agg-date/
HOST_REDSHIFT=your_redshift_host
SCHEMA_REDSHIFT=your_schema
LOGIN_REDSHIFT=your_login
PASSWORD_REDSHIFT=your_password
SLACK_WEBHOOK_URL=your_webhook_slack
```

### 🔐 3. Configurar os Arquivos em `sql-scripts/copy_table`

- Para os dois arquivos:
    - `COPY` - Se os buckets e pastas foram criados com os nomes sugeridos, não é preciso alterar.
    - `FROM` - Cole o ARN obtido no Redshift.

### 🐳 4. Construir a Imagem Docker

```bash
docker build -f Dockerfile.airflow -t data_pipeline_project .
```

### 🔄 5. Subir os Containers com Docker Compose

```bash
docker-compose up
```

### 🌐 6. Acessar o Airflow

- Abra no navegador: [http://localhost:8080](http://localhost:8080)

### 🧪 7. (Opcional) Conectar via DBeaver

Para facilitar a visualização e a execução de consultas no banco, recomenda-se usar o **DBeaver**:

1. Baixe e instale o DBeaver: [https://dbeaver.io/download/](https://dbeaver.io/download/)
2. Crie duas conexões:
    - Uma para o **PostgreSQL local**:
        - Host: `localhost`
        - Porta: `5433`
        - Banco: `game_data`
        - Usuário: `game`
        - Senha: `game123`
    - Uma para o **Redshift Serverless**:
        - Host: `HOST_REDSHIFT` (do `.env`)
        - Porta: `5439`
        - Banco: conforme configurado no Redshift
        - Usuário/Senha: conforme definido no `.env`

💡 *Este passo é opcional, mas útil para depurar e analisar os dados carregados.*"#,
        button: "🏗️ Ver Arquitetura Sugerida para uma Empresa de Jogos Mobile",
    },
    architecture: ArchitectureStrings {
        title: "🏗️ Arquitetura de Dados Sugerida",
        body: r#"### Arquitetura de Dados

A arquitetura foi pensada para ser **escalável**, **modular** e **fácil de manter**.

---

#### ✅ Prós

- **Separação clara por camadas (Raw, Bronze, Silver, Gold):**
  Facilita o processamento e a melhoria da qualidade dos dados a cada etapa, promovendo um pipeline mais confiável e organizado.

- **Uso do Airflow para orquestração:**
  Ferramenta robusta e amplamente adotada para agendar e monitorar fluxos. Suporta automações complexas com boa visibilidade. É open-source e tem uma grande comunidade.

- **Ingestão de dados com Airbyte:**
  Oferece conectores prontos para diversas fontes, acelerando a ingestão com pouco esforço de configuração. Também é open-source e personalizável.

- **Armazenamento escalável no Data Lake (S3):**
  O Amazon S3 oferece escalabilidade, durabilidade e flexibilidade para lidar com dados em diversos formatos e volumes.

- **Redshift como Data Warehouse:**
  Eficiente para análises em larga escala, com forte integração ao ecossistema AWS.

- **Visualização com Power BI:**
  Entrega insights de forma amigável, com integração simples ao Redshift e a outras fontes.

- **Observabilidade com CloudWatch e Slack:**
  Permite monitoramento centralizado e alertas automáticos, agilizando a detecção e a resolução de falhas.

---

#### ⚠️ Contras

- **Gestão de ferramentas self-hosted (Airflow e Airbyte):**
  Exige operação e manutenção contínuas, o que pode aumentar a complexidade operacional em cenários mais exigentes.

- **Custo e uso eficiente de recursos:**
  Serviços como EC2 e Redshift podem ficar caros sem uma governança adequada. O tempo de execução das instâncias precisa ser gerenciado para evitar gastos desnecessários.

- **Curva de aprendizado:**
  As ferramentas escolhidas são poderosas, mas têm uma curva de aprendizado considerável, podendo exigir mais tempo de implementação e de integração da equipe.

- **Monitoramento e logs distribuídos:**
  Logs e métricas espalhados por diferentes ferramentas (Airflow, Airbyte, CloudWatch) podem dificultar a centralização e a investigação de problemas em pipelines complexos."#,
        diagram_caption: "Diagrama da arquitetura",
        button: "📌 Voltar para a Visão Geral",
    },
    chrome: ChromeStrings {
        rows: "linhas",
        image: "imagem",
        log_title: "Log",
        hint_sidebar: "j/k: escolher página",
        hint_page: "j/k: rolar, Enter: próximo passo",
        hint_global: "Tab: foco, 1-4: ir, l: idioma, t: tema, d: log, q: sair",
    },
};
